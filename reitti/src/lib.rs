//! # reitti - Name-Based Dispatch
//!
//! `reitti` maps hierarchical, path-like names such as
//! `"repos/wolverian/reitti/issues"` to handler functions. Templates use `/`
//! as the separator and `{name}` for parameter segments; captured segments
//! are passed to the handler positionally, after a caller-supplied context.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reitti::prelude::*;
//!
//! let mut router: Router<Ctx, String> = Router::new();
//! router.add("repos/{owner}/{repo}/issues", |_: &Ctx, owner: String, repo: String| {
//!     Ok::<_, BoxError>(format!("owner={owner}, repo={repo}"))
//! });
//!
//! let handler = router.match_route("repos/wolverian/reitti/issues")?;
//! let result = handler.call(&ctx)?; // "owner=wolverian, repo=reitti"
//!
//! let err = router.match_route("foobar").unwrap_err();
//! // no handler found for route: "foobar"
//! ```
//!
//! ## Handler Shapes
//!
//! - `Fn(&C, String, ..) -> Result<R, E>` with up to 12 string-typed
//!   parameters; the capture count is checked on each call.
//! - [`variadic`] around `Fn(&C, &[String]) -> Result<R, E>` for any number
//!   of captures.
//! - Any type implementing [`Handler`] directly.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for registration and lookup.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod router;

pub use reitti_core::{
    // Error types
    BoxError,
    // Handler adaptation
    BoxHandler,
    Capture,
    // Templates
    Component,
    Direct,
    FnHandler,
    Handler,
    HandlerError,
    IntoHandler,
    MatchError,
    ReittiError,
    Route,
    SEPARATOR,
    Template,
    Variadic,
    variadic,
};

pub use router::{Matched, Router, RouterBuilder};

/// Prelude module - common imports for reitti.
///
/// # Usage
///
/// ```rust,ignore
/// use reitti::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Handlers
        Handler,
        HandlerError,
        MatchError,
        // Router
        Matched,
        ReittiError,
        Router,
        RouterBuilder,
        variadic,
    };
}
