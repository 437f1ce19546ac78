use crate::provider::new_plugin;
use crate::{CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Logs;

impl CommandAppend for Logs {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("logs")
                .about(
                    r#"Show the name, id and current version of a function,
	Example: `spotinst-info logs -f hello`"#,
                )
                .args_from_usage("-f, --function <function>   'Function name.'"),
        );
        app
    }
}

impl Logs {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(l_args) = args.subcommand_matches("logs") {
            let function = l_args.value_of("function").ok_or_else(|| {
                State::Custom(
                    "function name is required like: spotinst-info logs -f FUNCTION_NAME"
                        .to_string(),
                )
            })?;
            let mut plugin = new_plugin(l_args, Some(function))?;
            plugin.run_hook("before:logs:logs").await?;

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
