//! Structural checks on the labels of a domain name.

use crate::error::HostError;
use crate::host::validator::LabelCountPolicy;

/// Maximum length of a single label in bytes (RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Lower-case ASCII letters only, leaving every other code point untouched.
///
/// `fold_ascii_case("CAFÉ")` is `"cafÉ"`: the non-ASCII `É` survives so the
/// label can still be punycode-encoded as written.
pub fn fold_ascii_case(label: &str) -> String {
    label.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Run every structural check over ASCII-encoded labels, in order:
/// emptiness, length, label count, content.
pub fn assert_valid_host<P>(labels: &[String], policy: &P) -> Result<(), HostError>
where
    P: LabelCountPolicy + ?Sized,
{
    if let Some(position) = labels.iter().position(|label| label.is_empty()) {
        log::debug!("empty label at position {position}");
        return Err(HostError::EmptyLabel { position });
    }

    if let Some(label) = labels.iter().find(|label| label.len() > MAX_LABEL_LENGTH) {
        log::debug!("label {label:?} exceeds {MAX_LABEL_LENGTH} bytes");
        return Err(HostError::LabelTooLong {
            label: label.clone(),
            length: label.len(),
        });
    }

    if !policy.is_valid_labels_count(labels) {
        log::debug!("label count {} rejected by policy", labels.len());
        return Err(HostError::TooManyLabels {
            count: labels.len(),
        });
    }

    for label in labels {
        validate_label_content(label)?;
    }

    Ok(())
}

/// Validate a single label against `[0-9a-z]([0-9a-z-]{0,61}[0-9a-z])?`,
/// ignoring case.
pub fn validate_label_content(label: &str) -> Result<(), HostError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(HostError::InvalidLabelContent(label.to_string()));
    }

    // Letters, digits and hyphens only
    if !label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
        log::debug!("label {label:?} contains characters outside [0-9a-z-]");
        return Err(HostError::InvalidLabelContent(label.to_string()));
    }

    if label.starts_with('-') || label.ends_with('-') {
        log::debug!("label {label:?} starts or ends with a hyphen");
        return Err(HostError::InvalidLabelContent(label.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::validator::{AnyLabelCount, MaxLabels};

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fold_ascii_case() {
        assert_eq!(fold_ascii_case("CAFÉ"), "cafÉ");
        assert_eq!(fold_ascii_case("WwW"), "www");
        assert_eq!(fold_ascii_case("ÀBC"), "Àbc");
        assert_eq!(fold_ascii_case("123-X"), "123-x");
    }

    #[test]
    fn test_label_content() {
        // Valid labels
        assert!(validate_label_content("example").is_ok());
        assert!(validate_label_content("a-b-c").is_ok());
        assert!(validate_label_content("A1").is_ok());
        assert!(validate_label_content("x").is_ok());
        assert!(validate_label_content(&"a".repeat(63)).is_ok());

        // Invalid labels
        assert!(validate_label_content("").is_err());
        assert!(validate_label_content("-abc").is_err());
        assert!(validate_label_content("abc-").is_err());
        assert!(validate_label_content("test_label").is_err());
        assert!(validate_label_content("caf\u{e9}").is_err());
        assert!(validate_label_content(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_check_order() {
        // Emptiness is reported before length and content
        let result = assert_valid_host(&labels(&["-bad", "", "a".repeat(64).as_str()]), &AnyLabelCount);
        assert_eq!(result, Err(HostError::EmptyLabel { position: 1 }));

        // Length before count
        let result = assert_valid_host(&labels(&["a", "b", "a".repeat(64).as_str()]), &MaxLabels(2));
        assert!(matches!(result, Err(HostError::LabelTooLong { length: 64, .. })));

        // Count before content
        let result = assert_valid_host(&labels(&["a", "b", "-c"]), &MaxLabels(2));
        assert_eq!(result, Err(HostError::TooManyLabels { count: 3 }));

        let result = assert_valid_host(&labels(&["a", "b", "-c"]), &MaxLabels(3));
        assert_eq!(result, Err(HostError::InvalidLabelContent("-c".to_string())));
    }

    #[test]
    fn test_valid_host() {
        assert!(assert_valid_host(&labels(&["www", "example", "com"]), &AnyLabelCount).is_ok());
        assert!(assert_valid_host(&labels(&["xn--caf-dma", "fr"]), &AnyLabelCount).is_ok());
    }
}
