//! Stable short identifiers derived from instance hosts

use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 10;

/// Remove a leading `http://` or `https://`, ignoring case.
pub fn strip_scheme(value: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(prefix) = value.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &value[scheme.len()..];
            }
        }
    }
    value
}

/// Compute the routing identifier for a host or URL.
///
/// The input is scheme-stripped, then trimmed and lower-cased before hashing,
/// so `HTTP://Foo.com ` and `https://foo.com` share an identifier. A scheme
/// behind leading whitespace is kept. An empty host
/// still hashes; callers that need a real identifier check for a host first.
pub fn fingerprint(host_or_url: &str) -> String {
    let normalized = strip_scheme(host_or_url).trim().to_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let digest = hex::encode(hasher.finalize());

    digest[..FINGERPRINT_LEN].to_string()
}

/// Identifier for an instance's API host, absent when there is no host.
pub fn instance_id(api: &str) -> Option<String> {
    let host = strip_scheme(api);
    if host.is_empty() {
        None
    } else {
        Some(fingerprint(host))
    }
}
