use std::any::{type_name, Any, TypeId};

use eyre::Result;

use crate::core::bits::Selector;

use super::error::DelegateError;

/// Describes the argument an observer expects for a selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    selector: Selector,
    argument_type: TypeId,
    argument_type_name: &'static str,
}

impl MethodSignature {
    pub fn of<A: Any>(selector: Selector) -> Self {
        Self {
            selector,
            argument_type: TypeId::of::<A>(),
            argument_type_name: type_name::<A>(),
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn argument_type_name(&self) -> &'static str {
        self.argument_type_name
    }

    pub fn accepts(&self, invocation: &Invocation) -> bool {
        self.selector == invocation.selector && self.argument_type == invocation.argument_type()
    }
}

/// A call captured as data: the selector and its argument payload.
///
/// Invocations are built by the caller and handed by reference to every
/// responding observer in turn.
pub struct Invocation {
    selector: Selector,
    arguments: Box<dyn Any + Send + Sync>,
    argument_type_name: &'static str,
}

impl Invocation {
    pub fn new<A: Any + Send + Sync>(selector: Selector, arguments: A) -> Self {
        Self {
            selector,
            arguments: Box::new(arguments),
            argument_type_name: type_name::<A>(),
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn argument_type(&self) -> TypeId {
        self.arguments.as_ref().type_id()
    }

    pub fn argument_type_name(&self) -> &'static str {
        self.argument_type_name
    }

    /// Borrow the argument payload as `A`
    pub fn argument<A: Any>(&self) -> Result<&A> {
        self.arguments.downcast_ref::<A>().ok_or_else(|| {
            DelegateError::ArgumentMismatch {
                selector: self.selector.clone(),
                expected: type_name::<A>(),
                found: self.argument_type_name,
            }
            .into()
        })
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("selector", &self.selector)
            .field("arguments", &self.argument_type_name)
            .finish()
    }
}
