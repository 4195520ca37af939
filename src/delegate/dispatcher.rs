use std::{any::Any, sync::Arc};

use eyre::Result;

use crate::core::bits::Selector;

use super::{
    invocation::{Invocation, MethodSignature},
    multicast_delegate::MulticastDelegate,
    responder::DynamicObserver,
};

/// Generic `invoke(selector, arguments)` entry point over dynamic observers.
///
/// Same forwarding rule as [`MulticastDelegate`]: every live observer that has
/// a handler for the selector receives the invocation, in registration order.
#[derive(Clone, Debug)]
pub struct InvocationDispatcher {
    delegate: MulticastDelegate<dyn DynamicObserver>,
}

impl InvocationDispatcher {
    pub fn new(observers: &[Arc<dyn DynamicObserver>]) -> Self {
        Self::new_with_delegate(MulticastDelegate::new(observers))
    }

    pub fn new_with_delegate(delegate: MulticastDelegate<dyn DynamicObserver>) -> Self {
        Self { delegate }
    }

    pub fn delegate(&self) -> &MulticastDelegate<dyn DynamicObserver> {
        &self.delegate
    }

    pub fn responds_to(&self, selector: &Selector) -> bool {
        self.delegate.responds_to(selector)
    }

    /// Signature reported by the first observer responding to selector
    pub fn method_signature(&self, selector: &Selector) -> Option<MethodSignature> {
        self.delegate
            .responders(selector)
            .iter()
            .find_map(|observer| observer.method_signature(selector))
    }

    pub fn forward_invocation(&self, invocation: &Invocation) -> Result<()> {
        self.delegate.forward(invocation.selector(), |observer| {
            observer.forward_invocation(invocation)
        })
    }

    pub fn invoke<A>(&self, selector: impl Into<Selector>, arguments: A) -> Result<()>
    where
        A: Any + Send + Sync,
    {
        self.forward_invocation(&Invocation::new(selector.into(), arguments))
    }
}
