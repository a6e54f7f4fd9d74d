//! Redirect target helpers

use axum::http::HeaderValue;

/// Where a login or registration goes when `redirectTo` is absent or unusable
pub const DEFAULT_REDIRECT: &str = "/";

/// Accept `redirectTo` only when it stays on this site
///
/// Local means: starts with `/`, not `//`, and no backslash (browsers read
/// `/\evil.com` as protocol-relative). The target must also be usable as a
/// `Location` header value.
pub fn safe_redirect_to(target: Option<&str>) -> &str {
    match target.map(str::trim) {
        Some(t) if is_local_path(t) && is_header_safe(t) => t,
        _ => DEFAULT_REDIRECT,
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\')
}

fn is_header_safe(target: &str) -> bool {
    !target.chars().any(char::is_control) && HeaderValue::from_str(target).is_ok()
}

/// `path` plus the current query string, if any
pub fn href_with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path.to_string(),
    }
}
