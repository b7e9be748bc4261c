//! IP literal detection for URL hosts.
//!
//! Recognises dotted-decimal IPv4 addresses and IPv6 addresses, the latter
//! optionally wrapped in `[`/`]` and optionally carrying a link-local zone id
//! (`fe80::1%eth0`).

use std::net::{Ipv4Addr, Ipv6Addr};

use percent_encoding::percent_decode_str;

use crate::types::IpClassification;

/// Prefix (compared case-insensitively) of addresses allowed to carry a zone id.
const LINK_LOCAL_PREFIX: &str = "FE80";

/// Characters never allowed in a zone id.
const FORBIDDEN_ZONE_ID_CHARS: [char; 5] = ['?', '#', '@', '[', ']'];

/// Classify a raw host as IPv4, IPv6 or neither.
///
/// Never fails: anything that is not an IP literal comes back as
/// [`IpClassification::NotIp`] so the caller can try domain-name rules.
pub fn classify_ip_host(raw: &str) -> IpClassification {
    let (candidate, bracketed) = match (raw.strip_prefix('['), raw.ends_with(']')) {
        (Some(inner), true) if !inner.is_empty() => (&inner[..inner.len() - 1], true),
        (None, false) => (raw, false),
        _ => {
            log::trace!("host {raw:?} has unbalanced brackets, not an IP literal");
            return IpClassification::NotIp {
                malformed_bracketing: true,
            };
        },
    };

    if let Some((address, zone_id)) = filter_ipv6(candidate) {
        log::trace!("host {raw:?} classified as IPv6");
        return IpClassification::Ipv6 { address, zone_id };
    }

    if !bracketed && candidate.parse::<Ipv4Addr>().is_ok() {
        log::trace!("host {raw:?} classified as IPv4");
        return IpClassification::Ipv4(raw.to_string());
    }

    IpClassification::NotIp {
        malformed_bracketing: false,
    }
}

/// Validate an IPv6 candidate (brackets already removed).
///
/// Returns the normalized host text (lower-cased address, zone id appended
/// verbatim) and the zone id when one was accepted.
fn filter_ipv6(candidate: &str) -> Option<(String, Option<String>)> {
    match split_zone_id(candidate) {
        Some((address, zone_id)) => {
            let address = address.to_ascii_lowercase();
            address.parse::<Ipv6Addr>().ok()?;
            let host = format!("{address}%{zone_id}");
            Some((decode(&host), Some(zone_id.to_string())))
        },
        None => {
            // A rejected zone id leaves the '%' in place, so this only
            // succeeds for plain addresses.
            candidate.parse::<Ipv6Addr>().ok()?;
            Some((decode(&candidate.to_ascii_lowercase()), None))
        },
    }
}

/// Split `address%zone` for link-local addresses whose zone id is acceptable.
fn split_zone_id(candidate: &str) -> Option<(&str, &str)> {
    let is_link_local = candidate
        .get(..LINK_LOCAL_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LINK_LOCAL_PREFIX));
    if !is_link_local {
        return None;
    }

    let separator = candidate.find('%')?;
    let (address, zone_id) = (&candidate[..separator], &candidate[separator + 1..]);

    if is_valid_zone_id(zone_id) && decode(&candidate[separator..]) == candidate[separator..] {
        Some((address, zone_id))
    } else {
        log::debug!("rejecting zone id {zone_id:?} of {candidate:?}");
        None
    }
}

/// Zone ids are non-empty printable ASCII without URL delimiters.
fn is_valid_zone_id(zone_id: &str) -> bool {
    !zone_id.is_empty()
        && zone_id
            .chars()
            .all(|c| (' '..='~').contains(&c) && !FORBIDDEN_ZONE_ID_CHARS.contains(&c))
}

fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}
