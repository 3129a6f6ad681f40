//! Host validation for domain names and IPv4 addresses.

use crate::constants::{MAX_DOMAIN_LABEL_LEN, MAX_TLD_LEN, MIN_TLD_LEN};
use crate::error::{RestUtilsError, Result};

/// Kind of a validated host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostKind {
    /// Dotted-quad IPv4 address
    Ip,
    /// Domain name such as `api.example.com`
    Domain,
}

/// Checks whether `domain` is a valid domain name.
///
/// A domain is one or more labels, each followed by a dot, and a final
/// top-level domain. Labels are 1 to 63 ASCII alphanumerics or hyphens and
/// may not start or end with a hyphen. The top-level domain is 2 to 6 ASCII
/// letters.
pub fn is_valid_domain_name(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    if !(MIN_TLD_LEN..=MAX_TLD_LEN).contains(&tld.len())
        || !tld.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return false;
    }

    labels.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    (1..=MAX_DOMAIN_LABEL_LEN).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Checks whether `ip` is a valid dotted-quad IPv4 address.
///
/// Each octet is 1 to 3 ASCII digits with a value of at most 255. Leading
/// zeros are accepted (`010.001.0.1` is valid).
pub fn is_valid_ip_address(ip: &str) -> bool {
    let octets: Vec<&str> = ip.split('.').collect();
    octets.len() == 4 && octets.iter().all(|o| is_valid_octet(o))
}

fn is_valid_octet(octet: &str) -> bool {
    (1..=3).contains(&octet.len())
        && octet.bytes().all(|b| b.is_ascii_digit())
        && octet.parse::<u16>().map(|v| v <= 255).unwrap_or(false)
}

/// Classifies `host` as an IPv4 address or a domain name.
///
/// # Errors
/// Returns [`RestUtilsError::InvalidHost`] if `host` is neither.
pub fn validate_host(host: &str) -> Result<HostKind> {
    if is_valid_ip_address(host) {
        Ok(HostKind::Ip)
    } else if is_valid_domain_name(host) {
        Ok(HostKind::Domain)
    } else {
        Err(RestUtilsError::InvalidHost(host.to_string()))
    }
}
