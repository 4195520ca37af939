//! Multicast delegate: one call, forwarded to every observer able to handle it.
//!
//! Observers are registered once, in order, and held without ownership. A call
//! is identified by a [`Selector`](core::bits::Selector). Each observer tells
//! through [`Responder`](delegate::responder::Responder) whether it handles a
//! selector, and the delegate forwards the call to all that do, in
//! registration order. When nobody handles it the call fails with
//! [`DelegateError::UnsupportedOperation`](delegate::error::DelegateError).
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use multicast_delegate::{
//!     core::bits::Selector,
//!     delegate::{multicast_delegate::MulticastDelegate, responder::Responder},
//! };
//!
//! trait ScrollDelegate: Responder {
//!     fn did_scroll(&self, offset: f64) -> eyre::Result<()>;
//! }
//!
//! struct Logger;
//!
//! impl Responder for Logger {
//!     fn responds_to(&self, selector: &Selector) -> bool {
//!         selector.as_str() == "scrollViewDidScroll:"
//!     }
//! }
//!
//! impl ScrollDelegate for Logger {
//!     fn did_scroll(&self, offset: f64) -> eyre::Result<()> {
//!         tracing::info!(offset, "Scrolled");
//!         Ok(())
//!     }
//! }
//!
//! let logger: Arc<dyn ScrollDelegate> = Arc::new(Logger);
//! let delegate = MulticastDelegate::new(&[logger.clone()]);
//!
//! let selector = Selector::from("scrollViewDidScroll:");
//! assert!(delegate.responds_to(&selector));
//! delegate.forward(&selector, |observer| observer.did_scroll(12.5)).unwrap();
//! ```

pub mod core {
    pub mod bits;
    pub mod functional;
    pub mod json_file;
    pub mod logging;
    pub mod test_util;
}

pub mod delegate {
    pub mod config;
    pub mod dispatcher;
    pub mod error;
    pub mod invocation;
    pub mod multicast_delegate;
    pub mod responder;
}
