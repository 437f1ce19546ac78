use crate::schema::Service;
use std::path::Path;
use utility::{Error, Result};

/// parse_yaml_file parses serverless.yml into a Service
pub fn parse_yaml_file<P: AsRef<Path>>(
    yaml_file: P,
    provider_name: &str,
    envsubst: bool,
) -> Result<Service> {
    let yaml_file = yaml_file.as_ref();
    let data = std::fs::read_to_string(yaml_file).map_err(|e| {
        Error::Custom(format!("can't read {}: {}", yaml_file.display(), e))
    })?;
    parse_yaml_data(data.as_str(), provider_name, envsubst)
}

/// parse_yaml_data parses serverless.yml content and checks it targets `provider_name`
pub fn parse_yaml_data(data: &str, provider_name: &str, envsubst: bool) -> Result<Service> {
    let data = if envsubst {
        utility::envsubst::substitute_env(data)?
    } else {
        data.to_owned()
    };
    let service: Service = serde_yaml::from_str(data.as_str())?;

    if service.provider.name != provider_name {
        return Err(Error::Custom(format!(
            "['{}'] is the only valid 'provider.name' for this plugin, but you gave: {}",
            provider_name, service.provider.name
        )));
    }
    if service.service.is_empty() {
        return Err(Error::Custom(
            "'service' must be set in serverless.yml".to_string(),
        ));
    }

    Ok(service)
}
