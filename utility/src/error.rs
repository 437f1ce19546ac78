use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),
    #[error("Function '{0}' doesn't exist in this service.")]
    FunctionNotFound(String),
    #[error("No such {0}")]
    NotFound(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] url::ParseError),
    #[error("can't decode yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("can't decode json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, crate::Error>;
