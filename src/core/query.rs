//! Query-string helpers shared by the welcome-entry rewrite and the gate's
//! address cleanup.
//!
//! Deliberately DOM-free so the URL properties can be tested on the host.
//! Pairs are treated as opaque `key[=value]` strings; only the raw key is
//! matched, which is enough for the flag names used here.

fn pairs(search: &str) -> Vec<&str> {
    let trimmed = search.strip_prefix('?').unwrap_or(search);
    trimmed.split('&').filter(|p| !p.is_empty()).collect()
}

fn key_of(pair: &str) -> &str {
    pair.split('=').next().unwrap_or(pair)
}

/// True when `search` carries a parameter named `name`.
pub fn has_param(search: &str, name: &str) -> bool {
    pairs(search).iter().any(|p| key_of(p) == name)
}

/// Set `name=value` in `search`, replacing the first existing entry in place,
/// dropping any later duplicates, and preserving the order of the rest.
/// Returns the query without a leading `?`.
pub fn set_param(search: &str, name: &str, value: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut replaced = false;
    for pair in pairs(search) {
        if key_of(pair) == name {
            if !replaced {
                out.push(format!("{name}={value}"));
                replaced = true;
            }
        } else {
            out.push(pair.to_string());
        }
    }
    if !replaced {
        out.push(format!("{name}={value}"));
    }
    out.join("&")
}

/// Remove every `name` parameter, preserving the order and values of the
/// others. Returns the query without a leading `?`.
pub fn remove_param(search: &str, name: &str) -> String {
    pairs(search)
        .into_iter()
        .filter(|p| key_of(p) != name)
        .collect::<Vec<_>>()
        .join("&")
}

/// Rebuild a same-document href from its parts. `query` carries no `?`;
/// `hash` keeps its leading `#`, the way `location.hash` reports it.
pub fn compose_href(pathname: &str, query: &str, hash: &str) -> String {
    if query.is_empty() {
        format!("{pathname}{hash}")
    } else {
        format!("{pathname}?{query}{hash}")
    }
}

/// Tag listing pages get a root class so the stylesheet can restyle them.
pub fn is_tags_path(path: &str) -> bool {
    path.starts_with("/tags/")
}
