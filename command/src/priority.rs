pub(crate) const API_URL_ENVIRONMENT: &str = "SPOTINST_API_URL";

/// the api url given on the command line wins over the environment, then the default
pub(crate) fn get_api_url(argument_url: &str, environment_url: &str, default_url: &str) -> String {
    let api_url = if !argument_url.is_empty() {
        argument_url
    } else if !environment_url.is_empty() {
        environment_url
    } else {
        default_url
    };

    let api_url = api_url.trim_end_matches('/').to_string();
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        format!("https://{}", api_url)
    } else {
        api_url
    }
}

/// the first non empty of the flag, serverless.yml and the fallback
pub(crate) fn get_value<'a>(flag_value: &'a str, yaml_value: &'a str, fallback: &'a str) -> &'a str {
    if !flag_value.is_empty() {
        flag_value
    } else if !yaml_value.is_empty() {
        yaml_value
    } else {
        fallback
    }
}
