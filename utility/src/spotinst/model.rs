use serde::{Deserialize, Serialize};

/// LocalFunctionDescriptor is a function as it was declared and deployed from this machine
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct LocalFunctionDescriptor {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub stage: String,
}

/// FunctionLimits memory (MB) and timeout (seconds) of a function
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionLimits {
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub timeout: u64,
}

/// CronInfo scheduled invocation rule of a function, as kept by the spectrum events service
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CronInfo {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub cron_expression: String,
}

/// EndpointInfo an http route mapped onto a function by the endpoint service
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EndpointInfo {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub function_id: String,
}

/// FunctionRecord a deployed function joined with its cron and endpoint configuration
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    // the stage is known locally only, the api never returns it
    #[serde(default, skip_serializing_if = "crate::is_default")]
    pub stage: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub limits: FunctionLimits,
    #[serde(default)]
    pub latest_version: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron: Option<CronInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointInfo>,
}
