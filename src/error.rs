//! Error types for host validation and normalization.

use thiserror::Error;

/// Errors that can occur while validating or normalizing a host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host carries exactly one of the `[` / `]` IP-literal delimiters.
    #[error("Malformed IP literal: unbalanced square brackets")]
    MalformedBracketing,

    /// An interior or leading label is empty.
    #[error("Empty label at position {position}")]
    EmptyLabel { position: usize },

    /// A label exceeds the maximum length of 63 bytes once encoded.
    #[error("Label too long: {label} is {length} bytes, maximum is 63")]
    LabelTooLong { label: String, length: usize },

    /// The label-count policy rejected the host.
    #[error("Too many labels: {count} labels rejected by the label count policy")]
    TooManyLabels { count: usize },

    /// A label contains characters outside the DNS label grammar.
    #[error("Invalid label content: {0}")]
    InvalidLabelContent(String),

    /// An `xn--` label could not be decoded from punycode.
    #[error("Punycode decoding failed for label: {0}")]
    LabelDecode(String),
}
