use crate::hook::Hook;
use crate::info::Info;
use crate::logs::Logs;
use crate::provider::Provider;
use crate::{CommandAppend, State};
use clap::{App, AppSettings, ArgMatches};
use utility::{Error, Result};

const WELCOME_MSG: &str = "Report the Spotinst functions deployed by a serverless service";

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("spotinst-info")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .global_settings(&[AppSettings::ColoredHelp])
        .about(WELCOME_MSG);

    let app = Provider::append_subcommand(app);
    let app = Info::append_subcommand(app);
    let app = Logs::append_subcommand(app);
    let app = Hook::append_subcommand(app);
    app
}

pub async fn run(args: &ArgMatches<'_>) -> Result<()> {
    match dispatch_command(args).await {
        Ok(_) => Err(Error::Custom(
            "command not matched please contact the development team".to_string(),
        )),
        Err(s) => match s {
            State::Matched => Ok(()),
            State::Error(e) => Err(e),
            state => Err(Error::Custom(state.to_string())),
        },
    }
}

pub async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
    Info::dispatch_command(args).await?;
    Logs::dispatch_command(args).await?;
    Hook::dispatch_command(args).await
}
