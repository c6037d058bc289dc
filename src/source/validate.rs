//! Source Address Validation
//!
//! Decides whether a raw `u=` value may be fanned out to. Only absolute `http`/`https`
//! URLs with a well-formed host are admitted.

use regex::Regex;
use std::sync::OnceLock;
use url::{Host, Url};

pub const MAX_SOURCE_CHARS: usize = 2083;
pub const MIN_SOURCE_LEN: usize = 11;

fn domain_regex() -> &'static Regex {
    static DOMAIN: OnceLock<Regex> = OnceLock::new();
    DOMAIN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*\.?$")
            .expect("domain pattern is valid")
    })
}

/// Checks whether `raw` is a source address the aggregator may fetch.
pub fn is_eligible_source(raw: &str) -> bool {
    if raw.is_empty()
        || raw.chars().count() >= MAX_SOURCE_CHARS
        || raw.len() <= MIN_SOURCE_LEN
        || raw.starts_with('.')
        || raw.chars().any(char::is_whitespace)
    {
        return false;
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return false,
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    // `Url::parse` normalizes "http:google.com" into "http://google.com/"
    let lowered = raw.to_ascii_lowercase();
    if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => !domain.starts_with('.') && domain_regex().is_match(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
