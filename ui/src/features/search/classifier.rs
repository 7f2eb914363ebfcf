//! Network target classification
//!
//! Decides whether free text looks like something the search backend can
//! look up: an IPv4 literal, a domain name or an http(s) URL. The checks are
//! purely syntactic; nothing is resolved.

use regex::Regex;
use std::sync::LazyLock;

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("IPv4 pattern is valid")
});

// The whole label sequence is optional, so "" matches. Kept as deployed.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*)?$",
    )
    .expect("domain pattern is valid")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*$",
    )
    .expect("URL pattern is valid")
});

/// Which shape a target matched, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Ipv4,
    Domain,
    Url,
}

impl TargetKind {
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Ipv4 => "IP",
            TargetKind::Domain => "Domínio",
            TargetKind::Url => "URL",
        }
    }
}

pub fn is_ipv4(input: &str) -> bool {
    IPV4_PATTERN.is_match(input)
}

/// Dotted-numeric input is left to the IPv4 grammar: a top-level label made
/// only of digits is never a domain.
pub fn is_domain(input: &str) -> bool {
    if !DOMAIN_PATTERN.is_match(input) {
        return false;
    }
    match input.rsplit('.').next() {
        Some(tld) if !tld.is_empty() => !tld.bytes().all(|b| b.is_ascii_digit()),
        _ => true,
    }
}

pub fn is_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

/// First matching shape for an already-trimmed input
pub fn classify(input: &str) -> Option<TargetKind> {
    if is_ipv4(input) {
        Some(TargetKind::Ipv4)
    } else if is_domain(input) {
        Some(TargetKind::Domain)
    } else if is_url(input) {
        Some(TargetKind::Url)
    } else {
        None
    }
}

/// True when the input is an IP, a domain or a URL
pub fn is_valid_target(input: &str) -> bool {
    classify(input).is_some()
}
