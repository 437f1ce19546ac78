use crate::console::TerminalConsole;
use crate::error::check_tls_insecure;
use crate::plugin::{Plugin, PluginConfig};
use crate::priority::{get_api_url, get_value, API_URL_ENVIRONMENT};
use crate::report::InfoOptions;
use crate::CommandAppend;
use clap::{App, Arg, ArgMatches};
use config::credentials::{credentials_path, DEFAULT_PROFILE};
use stack::schema::DEFAULT_STAGE;
use stack::stack::parse_yaml_file;
use std::path::{Path, PathBuf};
use utility::{Result, DEFAULT_API_URL, PROVIDER_NAME};

pub const DEFAULT_YAML: &str = "serverless.yml";

/// Provider the flags shared by every command
pub(crate) struct Provider;

impl CommandAppend for Provider {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .short("c")
                    .global(true)
                    .takes_value(true)
                    .default_value(DEFAULT_YAML)
                    .help("Path to the serverless.yml of the service"),
            )
            .arg(
                Arg::with_name("stage")
                    .long("stage")
                    .short("s")
                    .global(true)
                    .takes_value(true)
                    .help("Stage of the service, defaults to provider.stage or dev"),
            )
            .arg(
                Arg::with_name("api")
                    .long("api")
                    .global(true)
                    .takes_value(true)
                    .help("Spotinst api url, overrides SPOTINST_API_URL"),
            )
            .arg(
                Arg::with_name("profile")
                    .long("profile")
                    .global(true)
                    .takes_value(true)
                    .help("Profile of the spotinst credentials file"),
            )
            .arg(
                Arg::with_name("credentials")
                    .long("credentials")
                    .global(true)
                    .takes_value(true)
                    .help("Path to the spotinst credentials file"),
            )
            .arg(
                Arg::with_name("state")
                    .long("state")
                    .global(true)
                    .takes_value(true)
                    .help("Path to the local functions state file"),
            )
            .arg(
                Arg::with_name("no-color")
                    .long("no-color")
                    .global(true)
                    .help("Print without colours"),
            );
        app
    }
}

/// plugin_config resolves the plugin configuration from the flags and serverless.yml,
/// returning it with the stage to use
pub(crate) fn plugin_config(args: &ArgMatches<'_>) -> Result<(PluginConfig, String)> {
    let yaml = args.value_of("config").unwrap_or(DEFAULT_YAML);
    let service = parse_yaml_file(yaml, PROVIDER_NAME, true)?;
    let base_dir = Path::new(yaml).parent().unwrap_or_else(|| Path::new(""));

    let stage = get_value(
        args.value_of("stage").unwrap_or_default(),
        service.stage(),
        DEFAULT_STAGE,
    );
    let profile = get_value(
        args.value_of("profile").unwrap_or_default(),
        service.provider.spotinst.profile.as_str(),
        DEFAULT_PROFILE,
    );

    let env_url = std::env::var(API_URL_ENVIRONMENT).unwrap_or_default();
    let api_url = get_api_url(
        args.value_of("api").unwrap_or_default(),
        env_url.as_str(),
        DEFAULT_API_URL,
    );
    let msg = check_tls_insecure(api_url.as_str());
    if !msg.is_empty() {
        colour::yellow_ln!("{}", msg);
    }

    let credentials = match args.value_of("credentials") {
        Some(path) => PathBuf::from(path),
        None => credentials_path()?,
    };
    let functions_state = match args.value_of("state") {
        Some(path) => PathBuf::from(path),
        None => base_dir.join(service.functions_state()),
    };

    let config = PluginConfig {
        provider_name: PROVIDER_NAME.to_string(),
        service: service.service.clone(),
        api_url,
        environment_id: service.provider.spotinst.environment.clone(),
        profile: profile.to_string(),
        credentials_path: credentials,
        functions_state,
        declared_functions: service.functions.keys().cloned().collect(),
    };
    Ok((config, stage.to_string()))
}

/// new_plugin builds the plugin for a command, `function` narrowing it to one function
pub(crate) fn new_plugin(
    args: &ArgMatches<'_>,
    function: Option<&str>,
) -> Result<Plugin<TerminalConsole>> {
    let (config, stage) = plugin_config(args)?;
    let options = InfoOptions {
        function: function.map(|f| f.to_string()),
        stage,
        show_fetch_errors: args.is_present("show-fetch-errors"),
    };
    let console = TerminalConsole::new(!args.is_present("no-color"));
    Ok(Plugin::new(config, options, console))
}
