use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env::VarError;
use std::path::{Path, PathBuf};
use utility::{Error, Result};

/// CONFIG_LOCATION_ENV is the name of the env variable used
/// to configure the location of the spotinst config folder.
/// When not set, DEFAULT_DIR location is used.
pub const CONFIG_LOCATION_ENV: &str = "SPOTINST_CONFIG";
/// overrides the token found in the credentials file
pub const TOKEN_ENV: &str = "SPOTINST_TOKEN";
/// overrides the account found in the credentials file
pub const ACCOUNT_ENV: &str = "SPOTINST_ACCOUNT";

pub const DEFAULT_DIR: &str = "~/.spotinst";
pub const DEFAULT_FILE: &str = "credentials";
pub const DEFAULT_PROFILE: &str = "default";

/// Credentials of one profile in the spotinst credentials file
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Credentials {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub account: String,
}

/// CredentialsFile the profiles of `~/.spotinst/credentials`
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    profiles: BTreeMap<String, Credentials>,
    file_path: PathBuf,
}

impl CredentialsFile {
    /// new initializes a credentials file for the given file path
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<CredentialsFile> {
        let file_path = file_path.as_ref();
        if file_path.as_os_str().is_empty() {
            return Err(Error::Custom(
                "can't create credentials with empty file path".to_string(),
            ));
        }
        Ok(CredentialsFile {
            profiles: BTreeMap::new(),
            file_path: file_path.to_path_buf(),
        })
    }

    /// load reads the yaml file from disk
    pub fn load(&mut self) -> Result<()> {
        if !file_exists(&self.file_path)? {
            return Err(Error::Custom(format!(
                "credentials file is not found at {}",
                self.file_path.display()
            )));
        }
        let data = std::fs::read_to_string(&self.file_path)?;
        if !data.trim().is_empty() {
            self.profiles = serde_yaml::from_str(data.as_str())?;
        }
        Ok(())
    }

    pub fn profile(&self, name: &str) -> Result<Credentials> {
        self.profiles.get(name).cloned().ok_or_else(|| {
            Error::Custom(format!(
                "profile '{}' not found in {}",
                name,
                self.file_path.display()
            ))
        })
    }
}

/// config_dir returns the path to the spotinst config directory, honouring SPOTINST_CONFIG
pub fn config_dir() -> Result<String> {
    match std::env::var(CONFIG_LOCATION_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(dir),
        Ok(_) | Err(VarError::NotPresent) => Ok(DEFAULT_DIR.into()),
        Err(e) => Err(Error::Custom(format!("{:?}", e))),
    }
}

/// credentials_path resolves `<config dir>/credentials` with `~` expanded
pub fn credentials_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    let dir = shellexpand::tilde(&dir);
    Ok(PathBuf::from(dir.into_owned()).join(DEFAULT_FILE).clean())
}

fn file_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(Error::Io(err)),
    }
}

/// replaces the token and account with the non empty overrides
pub fn apply_overrides(
    credentials: Credentials,
    token: Option<String>,
    account: Option<String>,
) -> Credentials {
    let pick = |over: Option<String>, current: String| match over {
        Some(val) if !val.is_empty() => val,
        _ => current,
    };
    Credentials {
        token: pick(token, credentials.token),
        account: pick(account, credentials.account),
    }
}

/// reads the given profile from the credentials file at `path`.
/// The environment may supply the token instead, in which case a missing file is not an error.
pub fn load_credentials(path: &Path, profile: &str) -> Result<Credentials> {
    let token = std::env::var(TOKEN_ENV).ok();
    let account = std::env::var(ACCOUNT_ENV).ok();

    let from_file = if file_exists(path)? {
        let mut file = CredentialsFile::new(path)?;
        file.load()?;
        file.profile(profile)
    } else {
        Err(Error::Custom(format!(
            "credentials file is not found at {}",
            path.display()
        )))
    };

    match from_file {
        Ok(credentials) => Ok(apply_overrides(credentials, token, account)),
        Err(e) => match token {
            Some(token) if !token.is_empty() => {
                tracing::debug!("using {} since credentials are unavailable: {}", TOKEN_ENV, e);
                Ok(apply_overrides(Credentials::default(), Some(token), account))
            }
            _ => Err(e),
        },
    }
}
