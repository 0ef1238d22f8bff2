//! Error types for reitti.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ReittiError`] - Top-level error type for one-shot dispatch
//! - [`MatchError`] - No registered route accepts the name
//! - [`HandlerError`] - Errors surfaced by invoking a matched handler

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for reitti operations.
#[derive(Error, Debug)]
pub enum ReittiError {
    /// The name did not match any route.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The matched handler failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

/// Errors that can occur while resolving a name to a route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No route was found for the given name.
    #[error("no handler found for route: {0:?}")]
    NoRoute(String),
}

impl MatchError {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            MatchError::NoRoute(name) => name,
        }
    }
}

/// Errors returned by a bound handler invocation.
///
/// Argument-count mismatches and the handler's own failures travel through
/// the same channel; callers usually only need `Display`.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The number of captures differs from the handler's declared parameters.
    #[error("expected {expected} args, got {got}")]
    ArgumentCount {
        /// Parameters declared by the handler, excluding the context.
        expected: usize,
        /// Captures supplied by the matched route.
        got: usize,
    },

    /// The handler returned an error.
    #[error(transparent)]
    Handler(BoxError),
}

impl HandlerError {
    /// Box an arbitrary handler error.
    pub fn handler(err: impl Into<BoxError>) -> Self {
        HandlerError::Handler(err.into())
    }

    /// Returns true if this is an argument-count mismatch.
    pub fn is_argument_count(&self) -> bool {
        matches!(self, HandlerError::ArgumentCount { .. })
    }
}

impl From<BoxError> for HandlerError {
    fn from(err: BoxError) -> Self {
        HandlerError::Handler(err)
    }
}
