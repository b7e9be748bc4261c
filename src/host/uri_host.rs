//! The validated host of a URL.

use std::fmt;
use std::str::FromStr;

use crate::error::HostError;
use crate::host::punycode::to_ascii_label;
use crate::host::validator::{HostValidator, LabelCountPolicy};
use crate::types::ClassificationResult;

/// A validated URL host: either an IP literal or a domain name.
///
/// Immutable once parsed; the IP flags and labels come straight from the
/// [`ClassificationResult`] of a single validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    classification: ClassificationResult,
}

impl Host {
    /// Parse a host with the DNS label-count policy.
    ///
    /// A trailing dot marks the host as absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlhost::Host;
    ///
    /// let host = Host::parse("Bücher.Example.")?;
    /// assert_eq!(host.labels(), ["bücher", "example"]);
    /// assert_eq!(host.to_ascii(), "xn--bcher-kva.example.");
    /// assert_eq!(host.to_string(), "bücher.example.");
    /// # Ok::<(), urlhost::HostError>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self, HostError> {
        Self::parse_with(raw, &HostValidator::dns())
    }

    /// Parse a host with a caller-supplied validator.
    pub fn parse_with<P: LabelCountPolicy>(
        raw: &str,
        validator: &HostValidator<P>,
    ) -> Result<Self, HostError> {
        let classification = validator.validate(raw, true)?;
        Ok(Self { classification })
    }

    /// Get the underlying classification.
    pub fn classification(&self) -> &ClassificationResult {
        &self.classification
    }

    pub fn is_ipv4(&self) -> bool {
        self.classification.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.classification.is_ipv6()
    }

    pub fn is_ip(&self) -> bool {
        self.classification.is_ip()
    }

    pub fn is_absolute(&self) -> bool {
        self.classification.is_absolute()
    }

    /// Decoded labels, left to right. Empty for IP literals.
    pub fn labels(&self) -> &[String] {
        self.classification.labels()
    }

    /// Get a label by offset.
    ///
    /// Non-negative offsets count from the left (`0` is the first label),
    /// negative ones from the right (`-1` is the last label).
    pub fn label(&self, offset: isize) -> Option<&str> {
        let labels = self.labels();
        let index = if offset < 0 {
            labels.len().checked_sub(offset.unsigned_abs())?
        } else {
            offset as usize
        };
        labels.get(index).map(String::as_str)
    }

    /// The IP literal without brackets, or `None` for domain names.
    pub fn ip_literal(&self) -> Option<&str> {
        self.classification.ip_literal()
    }

    pub fn zone_id(&self) -> Option<&str> {
        self.classification.zone_id()
    }

    /// Serialize with domain labels in their Unicode form.
    pub fn to_unicode(&self) -> String {
        self.serialize(|label| label.to_string())
    }

    /// Serialize with domain labels in their ASCII-compatible form.
    pub fn to_ascii(&self) -> String {
        self.serialize(to_ascii_label)
    }

    fn serialize(&self, convert: impl Fn(&str) -> String) -> String {
        match &self.classification {
            ClassificationResult::Ipv4(address) => address.clone(),
            ClassificationResult::Ipv6 { address, .. } => format!("[{address}]"),
            ClassificationResult::Domain {
                labels,
                is_absolute,
            } => {
                let mut host = labels
                    .iter()
                    .map(|label| convert(label.as_str()))
                    .collect::<Vec<_>>()
                    .join(".");
                if *is_absolute {
                    host.push('.');
                }
                host
            },
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_unicode())
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
