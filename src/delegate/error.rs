use thiserror::Error;

use crate::core::bits::Selector;

/// Errors raised by the delegate itself.
///
/// Failures produced by observers are never wrapped in this type. They reach
/// the caller as the observer's own `eyre::Report`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelegateError {
    /// No registered observer responds to the selector
    #[error("Unsupported operation: no observer responds to `{0}`")]
    UnsupportedOperation(Selector),

    /// Invocation argument payload was read as a different type
    #[error("Argument mismatch for `{selector}`: expected {expected}, found {found}")]
    ArgumentMismatch {
        selector: Selector,
        expected: &'static str,
        found: &'static str,
    },
}

impl DelegateError {
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, DelegateError::UnsupportedOperation(_))
    }
}

/// Tells whether report carries [`DelegateError::UnsupportedOperation`].
pub fn is_unsupported_operation(report: &eyre::Report) -> bool {
    report
        .downcast_ref::<DelegateError>()
        .is_some_and(DelegateError::is_unsupported_operation)
}
