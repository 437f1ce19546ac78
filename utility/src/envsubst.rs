use crate::Error;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// replaces `${VAR}` and `${VAR:-default}` references in `data` with values taken from `vars`.
///
/// an unset or empty variable falls back to its default, or to an empty string when no
/// default was given.
pub fn substitute(data: &str, vars: &HashMap<String, String>) -> crate::Result<String> {
    let regex = Regex::new(r#"\$\{([a-zA-Z_][a-zA-Z0-9_]*)(?::?-([^}]*))?\}"#)
        .map_err(|e| Error::Custom(format!("{:?}", e)))?;

    let out = regex.replace_all(data, |cap: &Captures| {
        let default = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        match vars.get(&cap[1]) {
            Some(val) if !val.is_empty() => val.to_string(),
            _ => default.to_string(),
        }
    });
    Ok(out.into_owned())
}

/// substitutes using the current process environment
pub fn substitute_env(data: &str) -> crate::Result<String> {
    let vars = std::env::vars().collect();
    substitute(data, &vars)
}
