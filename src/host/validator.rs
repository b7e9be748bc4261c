//! Host validation: IP-literal fast path, then domain-label normalization.

use crate::error::HostError;
use crate::host::ip::classify_ip_host;
use crate::host::labels::{assert_valid_host, fold_ascii_case};
use crate::host::punycode::{to_ascii_label, to_unicode_label};
use crate::types::{ClassificationResult, IpClassification};

/// Maximum number of labels in a DNS name.
pub const MAX_DNS_LABELS: usize = 127;

/// Decides whether a domain name has an acceptable number of labels.
///
/// Any `Fn(&[String]) -> bool` closure is a policy:
///
/// ```
/// use urlhost::HostValidator;
///
/// let validator = HostValidator::new(|labels: &[String]| labels.len() <= 3);
/// assert!(validator.validate("a.b.c", false).is_ok());
/// assert!(validator.validate("a.b.c.d", false).is_err());
/// ```
pub trait LabelCountPolicy {
    /// Return `true` when `labels` (ASCII-encoded, trailing dot excluded)
    /// has an acceptable length.
    fn is_valid_labels_count(&self, labels: &[String]) -> bool;
}

impl<F> LabelCountPolicy for F
where
    F: Fn(&[String]) -> bool,
{
    fn is_valid_labels_count(&self, labels: &[String]) -> bool {
        self(labels)
    }
}

/// Accepts at most [`MAX_DNS_LABELS`] labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnsLabelCount;

impl LabelCountPolicy for DnsLabelCount {
    fn is_valid_labels_count(&self, labels: &[String]) -> bool {
        labels.len() <= MAX_DNS_LABELS
    }
}

/// Accepts at most the given number of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLabels(pub usize);

impl LabelCountPolicy for MaxLabels {
    fn is_valid_labels_count(&self, labels: &[String]) -> bool {
        labels.len() <= self.0
    }
}

/// Accepts any number of labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyLabelCount;

impl LabelCountPolicy for AnyLabelCount {
    fn is_valid_labels_count(&self, _labels: &[String]) -> bool {
        true
    }
}

/// Validates and normalizes raw host strings.
///
/// Holds nothing but its label-count policy, so one validator can be shared
/// freely between callers.
#[derive(Debug, Clone, Default)]
pub struct HostValidator<P = DnsLabelCount> {
    policy: P,
}

impl HostValidator<DnsLabelCount> {
    /// Create a validator enforcing the DNS ceiling of 127 labels.
    pub fn dns() -> Self {
        Self {
            policy: DnsLabelCount,
        }
    }
}

impl<P: LabelCountPolicy> HostValidator<P> {
    /// Create a validator with a custom label-count policy.
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Get the label-count policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Validate a raw host taken from a URL.
    ///
    /// IP literals are returned as-is (normalized) and skip label checks.
    /// Anything else is treated as a domain name: with `is_absolute_hint`
    /// set, one trailing dot is stripped and recorded as
    /// `is_absolute` on the returned domain; without it, a trailing
    /// dot leaves an empty last label and fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlhost::HostValidator;
    ///
    /// let result = HostValidator::dns().validate("WWW.ExAmple.COM.", true)?;
    /// assert_eq!(result.labels(), ["www", "example", "com"]);
    /// assert!(result.is_absolute());
    /// # Ok::<(), urlhost::HostError>(())
    /// ```
    pub fn validate(
        &self,
        raw: &str,
        is_absolute_hint: bool,
    ) -> Result<ClassificationResult, HostError> {
        let malformed_bracketing = match classify_ip_host(raw) {
            IpClassification::Ipv4(address) => return Ok(ClassificationResult::Ipv4(address)),
            IpClassification::Ipv6 { address, zone_id } => {
                return Ok(ClassificationResult::Ipv6 { address, zone_id });
            },
            IpClassification::NotIp {
                malformed_bracketing,
            } => malformed_bracketing,
        };

        self.validate_domain(raw, is_absolute_hint).map_err(|err| {
            if malformed_bracketing {
                log::debug!("host {raw:?} failed as a domain ({err}), reporting bracketing");
                HostError::MalformedBracketing
            } else {
                err
            }
        })
    }

    fn validate_domain(
        &self,
        raw: &str,
        is_absolute_hint: bool,
    ) -> Result<ClassificationResult, HostError> {
        let (name, is_absolute) = match raw.strip_suffix('.') {
            Some(name) if is_absolute_hint => (name, true),
            _ => (raw, false),
        };

        let encoded: Vec<String> = name
            .split('.')
            .map(|label| to_ascii_label(&fold_ascii_case(label)))
            .collect();

        assert_valid_host(&encoded, &self.policy)?;

        let labels = encoded
            .iter()
            .map(|label| to_unicode_label(label))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClassificationResult::Domain {
            labels,
            is_absolute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_literals_skip_label_checks() {
        let validator = HostValidator::new(MaxLabels(1));

        let result = validator.validate("192.168.0.1", false).unwrap();
        assert_eq!(result, ClassificationResult::Ipv4("192.168.0.1".to_string()));

        let result = validator.validate("[FE80::1%Eth0]", false).unwrap();
        assert_eq!(
            result,
            ClassificationResult::Ipv6 {
                address: "fe80::1%Eth0".to_string(),
                zone_id: Some("Eth0".to_string()),
            }
        );
    }

    #[test]
    fn test_domain_normalization() {
        let result = HostValidator::dns().validate("WWW.ExAmple.COM", false).unwrap();
        assert_eq!(result.labels(), ["www", "example", "com"]);
        assert!(!result.is_ip());
        assert!(!result.is_absolute());
    }

    #[test]
    fn test_absolute_hint() {
        let validator = HostValidator::dns();

        let result = validator.validate("example.com.", true).unwrap();
        assert_eq!(result.labels(), ["example", "com"]);
        assert!(result.is_absolute());

        // Without the hint a trailing dot is an empty label
        assert_eq!(
            validator.validate("example.com.", false),
            Err(HostError::EmptyLabel { position: 2 })
        );

        // Only one trailing dot is stripped
        assert_eq!(
            validator.validate("example.com..", true),
            Err(HostError::EmptyLabel { position: 2 })
        );

        // Hint without a trailing dot is not absolute
        let result = validator.validate("example.com", true).unwrap();
        assert!(!result.is_absolute());
    }

    #[test]
    fn test_label_count_policies() {
        let closure = HostValidator::new(|labels: &[String]| labels.len() <= 3);
        assert!(closure.validate("a.b.c", false).is_ok());
        assert_eq!(
            closure.validate("a.b.c.d", false),
            Err(HostError::TooManyLabels { count: 4 })
        );

        let max = HostValidator::new(MaxLabels(2));
        assert!(max.validate("a.b.", true).is_ok());
        assert!(max.validate("a.b.c", false).is_err());

        let dns = HostValidator::dns();
        let host_127 = vec!["a"; 127].join(".");
        let host_128 = vec!["a"; 128].join(".");
        assert!(dns.validate(&host_127, false).is_ok());
        assert_eq!(
            dns.validate(&host_128, false),
            Err(HostError::TooManyLabels { count: 128 })
        );

        let any = HostValidator::new(AnyLabelCount);
        assert!(any.validate(&host_128, false).is_ok());
    }

    #[test]
    fn test_malformed_bracketing_is_reported() {
        let validator = HostValidator::dns();
        assert_eq!(validator.validate("[::1", false), Err(HostError::MalformedBracketing));
        assert_eq!(validator.validate("example.com]", false), Err(HostError::MalformedBracketing));
    }

    #[test]
    fn test_rejected_zone_id_falls_through() {
        let validator = HostValidator::dns();
        assert!(matches!(
            validator.validate("fe80::1%25eth0", false),
            Err(HostError::InvalidLabelContent(_))
        ));
    }

    #[test]
    fn test_unicode_labels_round_trip() {
        let result = HostValidator::dns().validate("CAFÉ.Example", false).unwrap();
        assert_eq!(result.labels(), ["cafÉ", "example"]);

        let result = HostValidator::dns().validate("xn--mnchen-3ya.de", false).unwrap();
        assert_eq!(result.labels(), ["münchen", "de"]);
    }

    #[test]
    fn test_decode_error() {
        assert!(matches!(
            HostValidator::dns().validate("xn--99999999999999999999.com", false),
            Err(HostError::LabelDecode(_))
        ));
    }
}
