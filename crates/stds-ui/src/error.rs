//! Error types for the page behaviours
//!
//! Every failure here degrades to "behaviour not installed"; nothing is
//! surfaced to the person using the page.

use wasm_bindgen::JsValue;

/// Errors raised while wiring page behaviours
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BehaviorError {
    /// No `window` (not running in a browser)
    #[error("window is not available")]
    WindowUnavailable,

    /// Window without a document
    #[error("document is not available")]
    DocumentUnavailable,

    /// A selector the browser refused to parse
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Configuration values that cannot drive the behaviours
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The JSON override block could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Clipboard write rejected or unsupported
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl BehaviorError {
    /// Wrap a thrown JS value from a DOM call
    #[must_use]
    pub fn dom(value: &JsValue) -> Self {
        Self::Dom(describe_js(value))
    }
}

/// Best-effort text for a thrown JS value
#[must_use]
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Result type alias for behaviour wiring
pub type Result<T> = std::result::Result<T, BehaviorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BehaviorError::WindowUnavailable.to_string(),
            "window is not available"
        );

        let err = BehaviorError::InvalidSelector {
            selector: "input[".to_string(),
            reason: "SyntaxError".to_string(),
        };
        assert_eq!(err.to_string(), "invalid selector 'input[': SyntaxError");

        let err = BehaviorError::InvalidConfig("token_max_len must be at least 1".to_string());
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_error_clone() {
        let error = BehaviorError::Clipboard("denied".to_string());
        assert_eq!(error.clone(), error);
    }
}
