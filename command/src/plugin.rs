use crate::console::Console;
use crate::report::{Info, InfoOptions, Report};
use config::credentials::load_credentials;
use proxy::auth::BearerToken;
use proxy::client::Client;
use proxy::params::DefaultParams;
use stack::registry::FunctionsState;
use std::path::PathBuf;
use utility::model::FunctionRecord;
use utility::{Error, Result};

/// HookAction what the plugin does when the host reaches a lifecycle event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HookAction {
    Init,
    InitThenLogs,
    Info,
}

pub const HOOKS: &[(&str, HookAction)] = &[
    ("before:info:info", HookAction::Init),
    ("before:deploy:deploy", HookAction::Init),
    ("before:deploy:function:deploy", HookAction::Init),
    ("before:logs:logs", HookAction::InitThenLogs),
    ("info:info", HookAction::Info),
    ("after:deploy:deploy", HookAction::Info),
    ("after:deploy:function:deploy", HookAction::Info),
];

pub fn hook_action(event: &str) -> Option<HookAction> {
    HOOKS
        .iter()
        .find(|(name, _)| *name == event)
        .map(|(_, action)| *action)
}

/// PluginConfig everything the plugin reads from serverless.yml and the command line
#[derive(Debug, Clone, PartialEq)]
pub struct PluginConfig {
    pub provider_name: String,
    pub service: String,
    pub api_url: String,
    pub environment_id: String,
    pub profile: String,
    pub credentials_path: PathBuf,
    pub functions_state: PathBuf,
    /// functions declared in serverless.yml, empty keeps every deployed function
    pub declared_functions: Vec<String>,
}

// state available once `init` ran
struct Session {
    client: Client,
    defaults: DefaultParams,
    registry: FunctionsState,
}

/// Plugin answers the host's lifecycle hooks
pub struct Plugin<C> {
    config: PluginConfig,
    options: InfoOptions,
    console: C,
    session: Option<Session>,
}

impl<C: Console> Plugin<C> {
    pub fn new(config: PluginConfig, options: InfoOptions, console: C) -> Plugin<C> {
        Plugin {
            config,
            options,
            console,
            session: None,
        }
    }

    pub fn hooks() -> &'static [(&'static str, HookAction)] {
        HOOKS
    }

    pub async fn run_hook(&mut self, event: &str) -> Result<Option<Report>> {
        let action = hook_action(event)
            .ok_or_else(|| Error::Custom(format!("unknown lifecycle hook: {}", event)))?;
        tracing::debug!("running hook {} ({:?})", event, action);

        match action {
            HookAction::Init => {
                self.init()?;
                Ok(None)
            }
            HookAction::InitThenLogs => {
                self.init()?;
                self.logs().await?;
                Ok(None)
            }
            HookAction::Info => self.info().await.map(Some),
        }
    }

    /// init loads the local credentials and functions state and builds the api client
    pub fn init(&mut self) -> Result<()> {
        let credentials = load_credentials(
            self.config.credentials_path.as_path(),
            self.config.profile.as_str(),
        )?;
        let client = BearerToken::new(credentials.token)?
            .into_client(self.config.api_url.as_str())?
            .with_user_agent(format!(
                "{}-info/{}",
                self.config.provider_name,
                env!("CARGO_PKG_VERSION")
            ));
        let declared: Vec<&str> = self
            .config
            .declared_functions
            .iter()
            .map(|name| name.as_str())
            .collect();
        let registry =
            FunctionsState::load(self.config.functions_state.as_path())?.retain_declared(&declared);

        self.session = Some(Session {
            client,
            defaults: DefaultParams::new(credentials.account, self.config.environment_id.as_str()),
            registry,
        });
        Ok(())
    }

    pub async fn info(&self) -> Result<Report> {
        let session = self.session()?;
        self.reporter(session).info().await
    }

    pub async fn logs(&self) -> Result<FunctionRecord> {
        let session = self.session()?;
        self.reporter(session).logs().await
    }

    fn reporter<'a>(&'a self, session: &'a Session) -> Info<'a, Client, FunctionsState, C> {
        Info::new(
            &session.client,
            &session.registry,
            &self.console,
            session.defaults.clone(),
            self.config.service.as_str(),
            self.options.clone(),
        )
    }

    fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or_else(|| {
            Error::Custom("the plugin is not initialised, run a before hook first".to_string())
        })
    }
}
