//! First-party instance classification

use crate::services::fingerprint::strip_scheme;

/// True when the API host is `root_domain` itself or one of its subdomains.
///
/// Matching is on a dot boundary, so `notimput.net` is not under `imput.net`.
pub fn is_official(root_domain: &str, api: Option<&str>) -> bool {
    let Some(api) = api.filter(|a| !a.is_empty()) else {
        return false;
    };
    let host = strip_scheme(api).to_lowercase();
    let root = root_domain.to_lowercase();

    host == root || host.strip_suffix(root.as_str()).is_some_and(|head| head.ends_with('.'))
}

fn is_subdomain_of(host: &str, root: &str) -> bool {
    host.len() > root.len() + 1
        && host.ends_with(root)
        && host.as_bytes()[host.len() - root.len() - 1] == b'.'
}

/// Short server name for official hosts, e.g. `video` for `video.imput.net`.
pub fn api_nick(root_domain: &str, api_host: &str) -> Option<String> {
    if !is_subdomain_of(api_host, root_domain) {
        return None;
    }
    api_host
        .split('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}
