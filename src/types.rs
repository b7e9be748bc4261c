//! Core data structures produced by host classification and validation.

/// Outcome of the IP-literal fast path.
///
/// `NotIp` is not an error: the caller falls through to domain-name
/// handling. `malformed_bracketing` records that exactly one of `[` / `]`
/// was present, so a later failure can be reported precisely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpClassification {
    /// Dotted-decimal IPv4 address, returned exactly as given.
    Ipv4(String),
    /// IPv6 address without brackets, lower-cased, with an optional zone id
    /// kept in its original case.
    Ipv6 {
        address: String,
        zone_id: Option<String>,
    },
    /// Neither an IPv4 nor an IPv6 literal.
    NotIp { malformed_bracketing: bool },
}

impl IpClassification {
    /// Check if the host was recognised as an IP literal.
    pub fn is_ip(&self) -> bool {
        !matches!(self, IpClassification::NotIp { .. })
    }
}

/// Result of a successful host validation.
///
/// A fresh value is produced for every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult {
    /// IPv4 literal (e.g. "192.168.0.1")
    Ipv4(String),
    /// IPv6 literal. `address` is the full host text without brackets,
    /// including `%zone` when a zone id was accepted (e.g. "fe80::1%eth0").
    Ipv6 {
        address: String,
        zone_id: Option<String>,
    },
    /// Domain name as an ordered sequence of decoded Unicode labels.
    /// The trailing dot of an absolute name is never stored as a label.
    Domain {
        labels: Vec<String>,
        is_absolute: bool,
    },
}

impl ClassificationResult {
    /// Check if the host is an IPv4 literal.
    pub fn is_ipv4(&self) -> bool {
        matches!(self, ClassificationResult::Ipv4(_))
    }

    /// Check if the host is an IPv6 literal.
    pub fn is_ipv6(&self) -> bool {
        matches!(self, ClassificationResult::Ipv6 { .. })
    }

    /// Check if the host is any kind of IP literal.
    pub fn is_ip(&self) -> bool {
        self.is_ipv4() || self.is_ipv6()
    }

    /// Domain labels, left to right. Empty for IP literals.
    pub fn labels(&self) -> &[String] {
        match self {
            ClassificationResult::Domain { labels, .. } => labels,
            _ => &[],
        }
    }

    /// Whether the domain name was written with a trailing dot.
    pub fn is_absolute(&self) -> bool {
        matches!(self, ClassificationResult::Domain { is_absolute: true, .. })
    }

    /// Zone id of a link-local IPv6 literal, if one was accepted.
    pub fn zone_id(&self) -> Option<&str> {
        match self {
            ClassificationResult::Ipv6 { zone_id, .. } => zone_id.as_deref(),
            _ => None,
        }
    }

    /// The IP literal text, or `None` for domain names.
    pub fn ip_literal(&self) -> Option<&str> {
        match self {
            ClassificationResult::Ipv4(address) => Some(address),
            ClassificationResult::Ipv6 { address, .. } => Some(address),
            ClassificationResult::Domain { .. } => None,
        }
    }
}
