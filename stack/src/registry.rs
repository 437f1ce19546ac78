use std::collections::BTreeMap;
use std::path::Path;
use utility::model::LocalFunctionDescriptor;
use utility::{Error, Result};

/// LocalRegistry gives access to the functions deployed from this machine.
/// Keys are either the function name or `name-stage`.
pub trait LocalRegistry {
    fn local_functions(&self) -> Result<BTreeMap<String, LocalFunctionDescriptor>>;
}

/// FunctionsState the local functions state file written on deploy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionsState {
    functions: BTreeMap<String, LocalFunctionDescriptor>,
}

impl FunctionsState {
    pub fn new(functions: BTreeMap<String, LocalFunctionDescriptor>) -> FunctionsState {
        FunctionsState { functions }
    }

    /// reads the state file, a missing file means nothing was deployed yet
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FunctionsState> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(data) => FunctionsState::parse(data.as_str()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no functions state at {}", path.display());
                Ok(FunctionsState::default())
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    pub fn parse(data: &str) -> Result<FunctionsState> {
        if data.trim().is_empty() {
            return Ok(FunctionsState::default());
        }
        let functions = serde_yaml::from_str(data)?;
        Ok(FunctionsState { functions })
    }

    /// drops entries for functions no longer declared in serverless.yml,
    /// keeping all of them when `names` is empty
    pub fn retain_declared(self, names: &[&str]) -> FunctionsState {
        if names.is_empty() {
            return self;
        }
        let functions = self
            .functions
            .into_iter()
            .filter(|(_, func)| names.contains(&func.name.as_str()))
            .collect();
        FunctionsState { functions }
    }
}

impl LocalRegistry for FunctionsState {
    fn local_functions(&self) -> Result<BTreeMap<String, LocalFunctionDescriptor>> {
        Ok(self.functions.clone())
    }
}

/// resolves `name` by exact key first, then by `name-stage`
pub fn resolve_function(
    functions: &BTreeMap<String, LocalFunctionDescriptor>,
    name: &str,
    stage: &str,
) -> Result<LocalFunctionDescriptor> {
    functions
        .get(name)
        .or_else(|| functions.get(format!("{}-{}", name, stage).as_str()))
        .cloned()
        .ok_or_else(|| Error::FunctionNotFound(name.to_string()))
}
