use crate::plugin::HOOKS;
use crate::provider::new_plugin;
use crate::{CommandAppend, State};
use clap::{App, Arg, ArgMatches, SubCommand};

pub(crate) struct Hook;

impl CommandAppend for Hook {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let events: Vec<&'static str> = HOOKS.iter().map(|(name, _)| *name).collect();
        let app = app.subcommand(
            SubCommand::with_name("hook")
                .about(
                    r#"Run lifecycle hooks in order, the way a serverless host would,
	Example: `spotinst-info hook before:deploy:deploy after:deploy:deploy`"#,
                )
                .arg(
                    Arg::with_name("EVENT")
                        .required(true)
                        .multiple(true)
                        .possible_values(&events)
                        .help("lifecycle events to run"),
                )
                .args_from_usage(
                    "-f, --function [function]   'Function name.'
                    --show-fetch-errors          'Report endpoint and cron lookups that failed'
                ",
                ),
        );
        app
    }
}

impl Hook {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(h_args) = args.subcommand_matches("hook") {
            let function = h_args.value_of("function");
            let mut plugin = new_plugin(h_args, function)?;

            for event in h_args.values_of("EVENT").into_iter().flatten() {
                plugin.run_hook(event).await?;
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
