//! Hostname pattern matching for whitelist entries and domain rules.

/// Strip the wildcard prefix and normalize case.
fn pattern_base(pattern: &str) -> String {
    let pattern = pattern.trim().to_lowercase();
    match pattern.strip_prefix("*.") {
        Some(base) => base.to_string(),
        None => pattern,
    }
}

/// Check whether `host` matches a hostname pattern.
///
/// `example.com` and `*.example.com` both match `example.com` itself and any
/// subdomain such as `sub.example.com`. `notexample.com` does not match.
pub fn host_matches(host: &str, pattern: &str) -> bool {
    let base = pattern_base(pattern);
    if base.is_empty() {
        return false;
    }

    let host = host.to_lowercase();
    if host == base {
        return true;
    }

    host.len() > base.len()
        && host.ends_with(&base)
        && host.as_bytes()[host.len() - base.len() - 1] == b'.'
}

/// Check whether `host` is covered by any whitelist entry.
pub fn is_whitelisted(host: &str, whitelist: &[String]) -> bool {
    whitelist.iter().any(|domain| host_matches(host, domain))
}
