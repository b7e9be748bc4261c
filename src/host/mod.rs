//! Host validation and normalization.
//!
//! This module contains the host-related functionality:
//! - IP literal classification (IPv4, IPv6, link-local zone ids)
//! - Punycode conversion of single labels
//! - Structural label checks
//! - The validator tying them together, and the `Host` value it produces

pub mod ip;
pub mod labels;
pub mod punycode;
pub mod uri_host;
pub mod validator;

// Re-export main functionality
pub use ip::classify_ip_host;
pub use labels::{assert_valid_host, fold_ascii_case, validate_label_content, MAX_LABEL_LENGTH};
pub use punycode::{is_ace_label, to_ascii_label, to_unicode_label, ACE_PREFIX};
pub use uri_host::Host;
pub use validator::{
    AnyLabelCount, DnsLabelCount, HostValidator, LabelCountPolicy, MaxLabels, MAX_DNS_LABELS,
};
