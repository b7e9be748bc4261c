//! urlhost - Host component validation and normalization for URLs
//!
//! Given the raw host of a URL, this crate decides whether it is an IPv4
//! literal, an IPv6 literal (optionally bracketed, optionally carrying a
//! link-local zone id) or a domain name. Domain names are split into labels,
//! ASCII case-folded, round-tripped through punycode and checked against the
//! DNS label rules.
//!
//! # Quick Start
//!
//! ```
//! use urlhost::{Host, HostValidator, HostError, MaxLabels};
//!
//! // Domain names come back as ordered, decoded labels
//! let host = Host::parse("WWW.ExAmple.COM")?;
//! assert_eq!(host.labels(), ["www", "example", "com"]);
//! assert!(!host.is_ip());
//!
//! // IP literals skip label validation
//! let host = Host::parse("[FE80::1%Eth0]")?;
//! assert!(host.is_ipv6());
//! assert_eq!(host.ip_literal(), Some("fe80::1%Eth0"));
//!
//! // The label-count policy is injected by the caller
//! let validator = HostValidator::new(MaxLabels(3));
//! assert!(validator.validate("a.b.c", false).is_ok());
//! assert_eq!(
//!     validator.validate("a.b.c.d", false),
//!     Err(HostError::TooManyLabels { count: 4 })
//! );
//! # Ok::<(), urlhost::HostError>(())
//! ```
//!
//! # Label rules
//!
//! After punycode encoding every label must:
//!
//! - be non-empty (a single trailing dot marks an absolute name instead)
//! - be at most 63 bytes long
//! - match `[0-9a-z]([0-9a-z-]{0,61}[0-9a-z])?`, ignoring case
//!
//! and the number of labels must satisfy the validator's
//! [`LabelCountPolicy`].
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, HostError>`. Validation is
//! all-or-nothing: the first failed check aborts and nothing is returned.

// Re-export host validation
pub use host::{
    assert_valid_host, classify_ip_host, fold_ascii_case, is_ace_label, to_ascii_label,
    to_unicode_label, validate_label_content, AnyLabelCount, DnsLabelCount, Host,
    HostValidator, LabelCountPolicy, MaxLabels, ACE_PREFIX, MAX_DNS_LABELS, MAX_LABEL_LENGTH,
};

// Re-export public types
pub use error::HostError;
pub use types::{ClassificationResult, IpClassification};

// Module declarations
pub mod error;
pub mod host;
pub mod types;
