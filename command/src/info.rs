use crate::provider::new_plugin;
use crate::{CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Info;

impl CommandAppend for Info {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("info")
                .about(
                    r#"Display the deployed functions of the service with their endpoints and cron triggers,
	Example: `spotinst-info info
spotinst-info info -f hello --stage prod`"#,
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

impl Info {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(i_args) = args.subcommand_matches("info") {
            let function = i_args.value_of("function");
            let mut plugin = new_plugin(i_args, function)?;

            plugin.run_hook("before:info:info").await?;
            plugin.run_hook("info:info").await?;

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
