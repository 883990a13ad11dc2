//! Wrapper hooks that decorate a single handler.
//!
//! Wrappers are never applied implicitly: wrap a handler before registering
//! it, e.g. `Arc::new(Logged::new("billing", AddTax))`.

mod cancel;
mod logging;
#[cfg(feature = "timeout")]
mod timeout;

pub use cancel::Cancellable;
pub use logging::Logged;
#[cfg(feature = "timeout")]
pub use timeout::Timeout;
