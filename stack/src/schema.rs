use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_STAGE: &str = "dev";
pub const DEFAULT_FUNCTIONS_STATE: &str = ".serverless/spotinst-functions.yml";

/// Service is the content of serverless.yml that this plugin cares about
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Service {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub provider: Provider,
    // Functions declared for deployment, keyed by function name
    #[serde(default)]
    pub functions: BTreeMap<String, FunctionDefinition>,
}

/// Provider section of serverless.yml
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Provider {
    pub name: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub spotinst: SpotinstSettings,
}

/// provider.spotinst
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpotinstSettings {
    #[serde(default)]
    pub environment: String,
    // Credentials profile, "default" when empty
    #[serde(default)]
    pub profile: String,
    // Path of the local functions state file, relative to serverless.yml
    #[serde(default)]
    pub functions_state: String,
}

/// FunctionDefinition a function as declared in serverless.yml
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FunctionDefinition {
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub handler: String,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub timeout: u64,
}

impl Service {
    /// stage to use when neither the command line nor the caller overrides it
    pub fn stage(&self) -> &str {
        if self.provider.stage.is_empty() {
            DEFAULT_STAGE
        } else {
            self.provider.stage.as_str()
        }
    }

    pub fn functions_state(&self) -> &str {
        if self.provider.spotinst.functions_state.is_empty() {
            DEFAULT_FUNCTIONS_STATE
        } else {
            self.provider.spotinst.functions_state.as_str()
        }
    }
}
