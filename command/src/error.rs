/// NOT_TLS_WARN Warning thrown when no SSL/TLS is used
pub(crate) const NOT_TLS_WARN: &str =
    "WARNING! You are not using an encrypted connection to the spotinst api, consider using HTTPS.";

/// check_tls_insecure returns a warning message if the given api url does not use https.
/// Local addresses are not warned about.
pub(crate) fn check_tls_insecure(api_url: &str) -> &'static str {
    if api_url.starts_with("https")
        || api_url.starts_with("http://127.0.0.1")
        || api_url.starts_with("http://localhost")
    {
        ""
    } else {
        NOT_TLS_WARN
    }
}
