//! # Router
//!
//! An ordered, append-only list of routes. Lookup scans in registration
//! order and the first matching route wins; later routes with the same
//! shape are shadowed silently.
//!
//! # Concurrency
//!
//! [`Router::add`] takes `&mut self`, so routes cannot be added while a
//! lookup is in progress. [`Router::match_route`] and [`Matched::call`]
//! only read the route list; a `Router` behind an `Arc` can serve lookups
//! from many threads at once.
//!
//! ```rust,ignore
//! let mut router: Router<Ctx, String> = Router::new();
//! router.add("repos/{owner}/{repo}/issues", |_: &Ctx, owner: String, repo: String| {
//!     Ok::<_, BoxError>(format!("owner={owner}, repo={repo}"))
//! });
//!
//! let matched = router.match_route("repos/wolverian/reitti/issues")?;
//! assert_eq!(matched.call(&ctx)?, "owner=wolverian, repo=reitti");
//! ```

use reitti_core::{HandlerError, IntoHandler, MatchError, ReittiError, Route, Template};
use std::fmt;

/// Maps path-like names to handlers.
///
/// `C` is the context passed through to handlers untouched; `R` is the
/// result every handler on this router produces.
pub struct Router<C, R> {
    routes: Vec<Route<C, R>>,
}

impl<C: 'static, R: 'static> Router<C, R> {
    /// Create an empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Start building a router fluently.
    pub fn builder() -> RouterBuilder<C, R> {
        RouterBuilder::new()
    }

    /// Register `handler` for `template`.
    ///
    /// Templates never fail to compile and duplicates are not detected.
    /// A handler whose parameter count differs from the template's is still
    /// registered; calling it reports [`HandlerError::ArgumentCount`].
    pub fn add<H, M>(&mut self, template: &str, handler: H) -> &mut Self
    where
        H: IntoHandler<C, R, M>,
    {
        let template = Template::compile(template);
        let handler = handler.into_handler();

        #[cfg(feature = "tracing")]
        {
            let params = template.param_count();
            match reitti_core::Handler::arity(&handler) {
                Some(arity) if arity != params => tracing::warn!(
                    template = %template,
                    params,
                    arity,
                    "handler arity does not match template parameters"
                ),
                _ => tracing::debug!(template = %template, params, "route added"),
            }
        }

        self.routes.push(Route::new(template, handler));
        self
    }

    /// Find the first route matching `name`, bound to its captures.
    pub fn match_route(&self, name: &str) -> Result<Matched<'_, C, R>, MatchError> {
        for (index, route) in self.routes.iter().enumerate() {
            if let Some(params) = route.match_name(name) {
                #[cfg(feature = "tracing")]
                tracing::trace!(name, template = %route.template(), index, "route matched");
                return Ok(Matched {
                    route,
                    index,
                    params,
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(name, routes = self.routes.len(), "no route matched");
        Err(MatchError::NoRoute(name.to_string()))
    }

    /// Match `name` and invoke the handler in one step.
    pub fn dispatch(&self, name: &str, ctx: &C) -> Result<R, ReittiError> {
        let matched = self.match_route(name)?;
        Ok(matched.call(ctx)?)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.routes.iter().map(Route::template)
    }
}

impl<C: 'static, R: 'static> Default for Router<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static, R: 'static> fmt::Debug for Router<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router").field("routes", &self.routes).finish()
    }
}

/// A matched route bound to its captures.
///
/// Call it with a context to run the handler. It can be called any number
/// of times; each call sees the same captures.
pub struct Matched<'r, C, R> {
    route: &'r Route<C, R>,
    index: usize,
    params: Vec<String>,
}

impl<C: 'static, R: 'static> Matched<'_, C, R> {
    /// Invoke the handler.
    pub fn call(&self, ctx: &C) -> Result<R, HandlerError> {
        self.route.handler().call(ctx, &self.params)
    }

    /// The template that matched.
    pub fn template(&self) -> &Template {
        self.route.template()
    }

    /// Captured values in template order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Registration index of the matched route.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Take the captures, dropping the binding.
    pub fn into_params(self) -> Vec<String> {
        self.params
    }
}

impl<C: 'static, R: 'static> fmt::Debug for Matched<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matched")
            .field("template", &self.route.template().as_str())
            .field("index", &self.index)
            .field("params", &self.params)
            .finish()
    }
}

/// Builder for constructing a [`Router`].
pub struct RouterBuilder<C, R> {
    router: Router<C, R>,
}

impl<C: 'static, R: 'static> Default for RouterBuilder<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static, R: 'static> RouterBuilder<C, R> {
    /// Create a new empty router builder.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Register a route.
    pub fn route<H, M>(mut self, template: &str, handler: H) -> Self
    where
        H: IntoHandler<C, R, M>,
    {
        self.router.add(template, handler);
        self
    }

    /// Build the router.
    pub fn build(self) -> Router<C, R> {
        self.router
    }
}
