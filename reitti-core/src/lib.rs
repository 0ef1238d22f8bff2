//! # reitti-core
//!
//! Core building blocks for the reitti dispatch engine.
//!
//! This crate has minimal dependencies and holds everything below the
//! router itself:
//!
//! - [`Component`] - Matches one `/`-delimited segment, either a literal or
//!   a `{parameter}` capture
//! - [`Template`] - A compiled route template, an ordered list of components
//! - [`Route`] - A template paired with a handler; answers whether a name
//!   matches and what it captures
//! - [`Handler`] / [`IntoHandler`] - The uniform calling convention and the
//!   adapters that bring typed and variadic functions to it
//!
//! # Error Types
//!
//! - [`ReittiError`] - Top-level error type
//! - [`MatchError`] - No route accepted the name
//! - [`HandlerError`] - Argument-count mismatch or handler failure

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod component;
mod error;
mod handler;
mod route;
mod template;

// Re-exports
pub use component::Component;
pub use error::{BoxError, HandlerError, MatchError, ReittiError};
pub use handler::{
    BoxHandler, Capture, Direct, FnHandler, Handler, IntoHandler, Variadic, variadic,
};
pub use route::Route;
pub use template::{SEPARATOR, Template};
