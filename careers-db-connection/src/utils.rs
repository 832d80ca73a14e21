use std::borrow::Cow;

use serde_json::json;

use crate::config::DbConnectionConfig;

/// Loggable summary of a pool configuration with credentials redacted.
pub fn config_metadata(config: &DbConnectionConfig) -> serde_json::Value {
    json!({
        "database_url": sanitize_database_url(&config.url).as_ref(),
        "max_connections": config.max_connections,
        "min_connections": config.min_connections,
        "connect_timeout_secs": config.connect_timeout_secs,
        "idle_timeout_secs": config.idle_timeout_secs,
        "test_before_acquire": config.test_before_acquire,
    })
}

pub fn sanitize_database_url(raw: &str) -> Cow<'_, str> {
    // Bare sqlite paths carry no credentials.
    let Some(scheme_end) = raw.find("://") else {
        if raw.starts_with("sqlite:") || !raw.contains('@') {
            return Cow::Borrowed(raw);
        }
        return Cow::Borrowed("<redacted>");
    };
    let rest = &raw[scheme_end + 3..];

    // Userinfo may itself contain '/', so the last '@' before the query marks
    // the end of the credentials.
    let query_start = rest.find('?').unwrap_or(rest.len());
    let before_query = &rest[..query_start];

    if let Some(at_pos) = before_query.rfind('@') {
        let scheme = &raw[..scheme_end + 3];
        let host_and_rest = &rest[at_pos + 1..];
        let mut result = String::with_capacity(scheme.len() + 10 + host_and_rest.len());
        result.push_str(scheme);
        result.push_str("****:****@");
        result.push_str(host_and_rest);
        Cow::Owned(result)
    } else {
        Cow::Borrowed(raw)
    }
}
