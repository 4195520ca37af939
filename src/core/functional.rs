use core::fmt;
use std::any::{type_name, Any};

use eyre::Result;

use crate::{
    core::bits::Selector,
    delegate::{
        error::DelegateError,
        invocation::{Invocation, MethodSignature},
        responder::DynamicObserver,
    },
};

/// Handles invocations forwarded to a dynamic observer
pub trait InvocationHandler: Send + Sync {
    fn handle_invocation(&self, invocation: &Invocation) -> Result<()>;
}

impl<F> InvocationHandler for F
where
    F: Fn(&Invocation) -> Result<()> + Send + Sync,
{
    fn handle_invocation(&self, invocation: &Invocation) -> Result<()> {
        (self)(invocation)
    }
}

/// Dynamic observer assembled from user functions.
///
/// Each handler is bound to one selector and one argument type. The observer
/// responds to exactly those selectors that have a handler.
pub struct FnObserver {
    handlers: Vec<(MethodSignature, Box<dyn InvocationHandler>)>,
}

// Handlers are closures, so only the signatures can be shown.
impl fmt::Debug for FnObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|(signature, _)| signature))
            .finish()
    }
}

impl Default for FnObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FnObserver {
    pub fn new() -> Self {
        Self { handlers: vec![] }
    }

    /// A selector may carry several handlers with different argument types.
    /// The first one accepting the invocation payload is used.
    pub fn with_invocation_handler(
        mut self,
        signature: MethodSignature,
        handler: Box<dyn InvocationHandler>,
    ) -> Self {
        self.handlers.push((signature, handler));
        self
    }

    pub fn with_handler<A, F>(self, selector: impl Into<Selector>, handler: F) -> Self
    where
        A: Any + Send + Sync,
        F: Fn(&A) -> Result<()> + Send + Sync + 'static,
    {
        self.with_invocation_handler(
            MethodSignature::of::<A>(selector.into()),
            Box::new(move |invocation: &Invocation| handler(invocation.argument::<A>()?)),
        )
    }

    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }

    fn find_handler(&self, selector: &Selector) -> Option<&(MethodSignature, Box<dyn InvocationHandler>)> {
        self.handlers
            .iter()
            .find(|(signature, _)| signature.selector() == selector)
    }

    // falls back to the first handler for the selector, which then reports
    // the argument mismatch
    fn find_accepting_handler(
        &self,
        invocation: &Invocation,
    ) -> Option<&(MethodSignature, Box<dyn InvocationHandler>)> {
        self.handlers
            .iter()
            .find(|(signature, _)| signature.accepts(invocation))
            .or_else(|| self.find_handler(invocation.selector()))
    }
}

impl DynamicObserver for FnObserver {
    fn method_signature(&self, selector: &Selector) -> Option<MethodSignature> {
        self.find_handler(selector)
            .map(|(signature, _)| signature.clone())
    }

    fn forward_invocation(&self, invocation: &Invocation) -> Result<()> {
        let (_, handler) = self.find_accepting_handler(invocation).ok_or_else(|| {
            DelegateError::UnsupportedOperation(invocation.selector().clone())
        })?;
        tracing::trace!(
            selector = %invocation.selector(),
            handler = type_name::<Self>(),
            "Handling invocation"
        );
        handler.handle_invocation(invocation)
    }
}

pub mod crossbeam {
    use std::any::type_name;

    use crossbeam::channel::Sender;

    use crate::{
        core::bits::Selector,
        delegate::invocation::{Invocation, MethodSignature},
    };

    use super::FnObserver;

    impl FnObserver {
        /// Pushes a copy of each argument into the channel.
        ///
        /// A disconnected channel is logged and does not fail the invocation.
        pub fn with_sender<A>(self, selector: impl Into<Selector>, sender: Sender<A>) -> Self
        where
            A: Clone + Send + Sync + 'static,
        {
            self.with_invocation_handler(
                MethodSignature::of::<A>(selector.into()),
                Box::new(move |invocation: &Invocation| {
                    let argument = invocation.argument::<A>()?;
                    if let Err(err) = sender.send(argument.clone()) {
                        tracing::warn!(
                            selector = %invocation.selector(),
                            "Failed to send {}: {:?}",
                            type_name::<A>(),
                            err
                        );
                    }
                    Ok(())
                }),
            )
        }
    }
}
