use eyre::Result;

use crate::core::bits::Selector;

use super::invocation::{Invocation, MethodSignature};

/// Capability check for observers.
///
/// Typed delegate traits take this as a supertrait, so that `dyn SomeDelegate`
/// can be held by a [`MulticastDelegate`](super::multicast_delegate::MulticastDelegate).
/// An observer answers `true` only for the selectors it actually handles.
pub trait Responder: Send + Sync {
    fn responds_to(&self, selector: &Selector) -> bool;
}

/// Observer receiving calls as [`Invocation`] data
pub trait DynamicObserver: Send + Sync {
    /// Signature of the handler for selector, or `None` when there is no handler
    fn method_signature(&self, selector: &Selector) -> Option<MethodSignature>;

    fn forward_invocation(&self, invocation: &Invocation) -> Result<()>;
}

impl Responder for dyn DynamicObserver {
    fn responds_to(&self, selector: &Selector) -> bool {
        self.method_signature(selector).is_some()
    }
}
