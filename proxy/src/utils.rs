pub const FUNCTION_PATH: &str = "/functions/function";
pub const ENDPOINT_PATTERN_PATH: &str = "/functions/endpoint/pattern";
pub const EVENTS_PATH: &str = "/spectrum/events";

pub const ACCOUNT_ID_KEY: &str = "accountId";
pub const ENVIRONMENT_ID_KEY: &str = "environmentId";
pub const ID_KEY: &str = "id";
pub const RESOURCE_ID_KEY: &str = "resourceId";
pub const ACTION_KEY: &str = "action";

/// action of the spectrum event that invokes a function on a schedule
pub const INVOKE_FUNCTION_ACTION: &str = "INVOKE_FUNCTION";

/// function_path returns the path of a single function resource
pub fn function_path(id: &str) -> String {
    format!("{}/{}", FUNCTION_PATH, id.trim_matches('/'))
}
