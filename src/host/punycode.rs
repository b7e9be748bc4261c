//! Conversion of single domain labels between Unicode and their
//! ASCII-compatible encoding (ACE).
//!
//! Only the punycode step of IDNA is applied; no mapping or bidi rules.

use idna::punycode;

use crate::error::HostError;

/// Prefix marking a punycode-encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// Check if a label carries the `xn--` prefix (case-insensitively).
pub fn is_ace_label(label: &str) -> bool {
    label
        .get(..ACE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ACE_PREFIX))
}

/// Encode a Unicode label to its ASCII-compatible form.
///
/// Labels made only of ASCII code points are returned unchanged. A label
/// punycode cannot represent is also returned unchanged; it still contains
/// non-ASCII characters and fails the label grammar later on.
pub fn to_ascii_label(label: &str) -> String {
    if label.is_ascii() {
        return label.to_string();
    }

    match punycode::encode_str(label) {
        Some(encoded) => format!("{ACE_PREFIX}{encoded}"),
        None => {
            log::debug!("punycode cannot encode label {label:?}");
            label.to_string()
        },
    }
}

/// Decode an ASCII-compatible label back to Unicode.
///
/// Labels without the `xn--` prefix are returned unchanged.
pub fn to_unicode_label(label: &str) -> Result<String, HostError> {
    if !is_ace_label(label) {
        return Ok(label.to_string());
    }

    let payload = &label[ACE_PREFIX.len()..];
    if payload.is_empty() {
        return Err(HostError::LabelDecode(label.to_string()));
    }

    punycode::decode_to_string(payload).ok_or_else(|| {
        log::debug!("invalid punycode in label {label:?}");
        HostError::LabelDecode(label.to_string())
    })
}
