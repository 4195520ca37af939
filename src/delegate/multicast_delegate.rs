use std::sync::{Arc, Weak};

use eyre::Result;
use itertools::Itertools;

use crate::core::bits::{Selector, Symbol};

use super::{error::DelegateError, responder::Responder};

pub const DEFAULT_LABEL: &str = "multicast-delegate";

/// Forwards calls to every observer that responds to them.
///
/// The observer list is fixed at construction and kept in registration order.
/// Observers are held through [`Weak`] handles, and so the delegate never keeps
/// an observer alive. An observer that has been released no longer responds to
/// anything, although it still occupies its slot in the list.
///
/// Forwarding is synchronous, on the caller's thread, and stops at the first
/// observer that fails.
pub struct MulticastDelegate<T: ?Sized> {
    label: Symbol,
    trace_invocations: bool,
    observers: Vec<Weak<T>>,
}

impl<T> MulticastDelegate<T>
where
    T: Responder + ?Sized,
{
    /// Registers observers in slice order.
    ///
    /// Only weak handles are kept. The caller must hold on to the `Arc`s for as
    /// long as the observers should receive calls: observers passed in a
    /// temporary array are released at the end of the statement, leaving a
    /// delegate that responds to nothing.
    pub fn new(observers: &[Arc<T>]) -> Self {
        Self::new_with_observers(observers.iter().map(Arc::downgrade).collect())
    }

    pub fn new_with_observers(observers: Vec<Weak<T>>) -> Self {
        Self::new_with_label(Symbol::from(DEFAULT_LABEL), false, observers)
    }

    pub(crate) fn new_with_label(
        label: Symbol,
        trace_invocations: bool,
        observers: Vec<Weak<T>>,
    ) -> Self {
        Self {
            label,
            trace_invocations,
            observers,
        }
    }

    pub fn label(&self) -> &Symbol {
        &self.label
    }

    /// Number of registered slots, including released observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn has_observers(&self) -> bool {
        self.live_count() > 0
    }

    pub fn live_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|observer| observer.strong_count() > 0)
            .count()
    }

    /// Would any observer handle this selector?
    pub fn responds_to(&self, selector: &Selector) -> bool {
        self.observers
            .iter()
            .filter_map(Weak::upgrade)
            .any(|observer| observer.responds_to(selector))
    }

    /// Live observers responding to selector, in registration order
    pub fn responders(&self, selector: &Selector) -> Vec<Arc<T>> {
        self.observers
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|observer| observer.responds_to(selector))
            .collect_vec()
    }

    /// Call `invoke` on every observer responding to selector.
    ///
    /// Fails with [`DelegateError::UnsupportedOperation`] when nobody responds,
    /// in which case `invoke` is never called. An error returned by `invoke` is
    /// passed back as is, and the remaining observers are not visited.
    pub fn forward<F>(&self, selector: &Selector, mut invoke: F) -> Result<()>
    where
        F: FnMut(&T) -> Result<()>,
    {
        let mut invoked = 0usize;

        for (position, observer) in self.observers.iter().enumerate() {
            let Some(observer) = observer.upgrade() else {
                tracing::trace!(
                    label = %self.label,
                    %selector,
                    position,
                    "Skipping released observer"
                );
                continue;
            };

            if !observer.responds_to(selector) {
                continue;
            }

            if self.trace_invocations {
                tracing::debug!(label = %self.label, %selector, position, "Forwarding");
            } else {
                tracing::trace!(label = %self.label, %selector, position, "Forwarding");
            }

            invoke(&*observer)?;
            invoked += 1;
        }

        if invoked == 0 {
            tracing::debug!(label = %self.label, %selector, "No observer responds");
            return Err(DelegateError::UnsupportedOperation(selector.clone()).into());
        }

        tracing::debug!(label = %self.label, %selector, invoked, "Forwarded");
        Ok(())
    }
}

impl<T: ?Sized> Clone for MulticastDelegate<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            trace_invocations: self.trace_invocations,
            observers: self.observers.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for MulticastDelegate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MulticastDelegate")
            .field("label", &self.label)
            .field("observers", &self.observers.len())
            .finish()
    }
}
