//! # Handler Adaptation
//!
//! Turns user functions of different shapes into one calling convention:
//! a context reference plus the ordered captures of a matched route.
//!
//! # Strategies
//!
//! - **Direct**: anything implementing [`Handler`] is stored as-is. This
//!   includes [`Variadic`], which hands the raw capture list to a closure
//!   `Fn(&C, &[String]) -> Result<R, E>` without checking its length.
//! - **Typed**: closures and functions `Fn(&C, T1, ..., Tn) -> Result<R, E>`
//!   (up to 12 parameters, each a [`Capture`]) are adapted through
//!   [`IntoHandler`]. The capture count is checked on every call and a
//!   mismatch yields [`HandlerError::ArgumentCount`].
//!
//! Shape errors (missing context, wrong return type, non-string parameters)
//! are rejected by the compiler at registration.
//!
//! ```rust,ignore
//! fn list_issues(ctx: &Ctx, owner: String, repo: String) -> Result<Vec<Issue>, ApiError> {
//!     ctx.client.issues(&owner, &repo)
//! }
//!
//! router.add("repos/{owner}/{repo}/issues", list_issues);
//! router.add("raw/{a}/{b}", variadic(|_ctx: &Ctx, args: &[String]| {
//!     Ok::<_, ApiError>(args.len())
//! }));
//! ```

use crate::error::{BoxError, HandlerError};
use std::{borrow::Cow, marker::PhantomData, sync::Arc};

/// A string-typed handler parameter.
///
/// Captures are assigned as-is; there is no parsing or coercion.
///
/// Parameters that would need parsing are rejected:
///
/// ```rust,compile_fail
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// adapt(|_: &(), id: u32| -> Result<String, BoxError> { Ok(id.to_string()) });
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive a route capture",
    label = "handler parameters after the context must be string-typed",
    note = "Use `String`, `Box<str>`, `Arc<str>` or `Cow<'static, str>`, and parse inside the handler."
)]
pub trait Capture: Sized + Send + 'static {
    /// Take ownership of a captured segment.
    fn from_capture(value: String) -> Self;
}

impl Capture for String {
    fn from_capture(value: String) -> Self {
        value
    }
}

impl Capture for Box<str> {
    fn from_capture(value: String) -> Self {
        value.into_boxed_str()
    }
}

impl Capture for Arc<str> {
    fn from_capture(value: String) -> Self {
        Arc::from(value)
    }
}

impl Capture for Cow<'static, str> {
    fn from_capture(value: String) -> Self {
        Cow::Owned(value)
    }
}

/// The uniform calling convention used by the router.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle routes with context `{C}` and result `{R}`",
    label = "missing `Handler<{C}, {R}>` implementation",
    note = "Implement `Handler` directly, or pass a function taking `&{C}` and string parameters."
)]
pub trait Handler<C, R>: Send + Sync + 'static {
    /// Invoke the handler with the captures of a successful match.
    fn call(&self, ctx: &C, args: &[String]) -> Result<R, HandlerError>;

    /// Declared parameter count excluding the context, or `None` when any
    /// number of captures is accepted.
    fn arity(&self) -> Option<usize> {
        None
    }
}

impl<C, R, H> Handler<C, R> for Box<H>
where
    H: Handler<C, R> + ?Sized,
{
    fn call(&self, ctx: &C, args: &[String]) -> Result<R, HandlerError> {
        (**self).call(ctx, args)
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }
}

impl<C, R, H> Handler<C, R> for Arc<H>
where
    H: Handler<C, R> + ?Sized,
{
    fn call(&self, ctx: &C, args: &[String]) -> Result<R, HandlerError> {
        (**self).call(ctx, args)
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }
}

/// A boxed handler as stored by routes.
pub type BoxHandler<C, R> = Box<dyn Handler<C, R>>;

/// Conversion of a function value into a [`Handler`].
///
/// `M` is a marker that keeps the implementations for different shapes
/// apart; callers never name it.
///
/// A handler takes the context by reference, then string-typed captures,
/// and returns `Result<R, E>`:
///
/// ```rust
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// use reitti_core::Handler;
///
/// let handler = adapt(|_: &(), owner: String| -> Result<String, BoxError> { Ok(owner) });
/// assert_eq!(handler.call(&(), &["wolverian".to_string()]).unwrap(), "wolverian");
/// ```
///
/// Anything else is rejected when the route is registered. Not a function:
///
/// ```rust,compile_fail
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// adapt(42u32);
/// ```
///
/// No `Result`:
///
/// ```rust,compile_fail
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// adapt(|_: &(), owner: String| owner);
/// ```
///
/// An error type that is not an error:
///
/// ```rust,compile_fail
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// adapt(|_: &(), owner: String| -> Result<String, u32> { Ok(owner) });
/// ```
///
/// Missing leading context:
///
/// ```rust,compile_fail
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// adapt(|owner: String| -> Result<String, BoxError> { Ok(owner) });
/// ```
///
/// Context of the wrong type:
///
/// ```rust,compile_fail
/// # use reitti_core::{BoxError, IntoHandler};
/// # fn adapt<M, H: IntoHandler<(), String, M>>(h: H) -> H::Handler { h.into_handler() }
/// adapt(|_: &u8, owner: String| -> Result<String, BoxError> { Ok(owner) });
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid route handler",
    label = "invalid handler signature",
    note = "Handlers look like `Fn(&C, String, ...) -> Result<R, E>` with at most 12 string parameters.",
    note = "For an unbounded parameter list wrap `Fn(&C, &[String]) -> Result<R, E>` with `variadic`."
)]
pub trait IntoHandler<C, R, M>: Sized {
    /// The adapted handler.
    type Handler: Handler<C, R>;

    /// Adapt `self`.
    fn into_handler(self) -> Self::Handler;
}

/// Marker for values that already implement [`Handler`].
#[derive(Debug)]
pub enum Direct {}

impl<C, R, H> IntoHandler<C, R, Direct> for H
where
    H: Handler<C, R>,
{
    type Handler = H;

    fn into_handler(self) -> Self::Handler {
        self
    }
}

/// Direct handler over the raw capture list.
pub struct Variadic<F, E> {
    func: F,
    _marker: PhantomData<fn() -> E>,
}

/// Wrap `Fn(&C, &[String]) -> Result<R, E>` as a [`Handler`] that accepts
/// any number of captures.
pub fn variadic<C, R, E, F>(func: F) -> Variadic<F, E>
where
    F: Fn(&C, &[String]) -> Result<R, E> + Send + Sync + 'static,
    E: Into<BoxError> + 'static,
{
    Variadic {
        func,
        _marker: PhantomData,
    }
}

impl<C, R, E, F> Handler<C, R> for Variadic<F, E>
where
    F: Fn(&C, &[String]) -> Result<R, E> + Send + Sync + 'static,
    E: Into<BoxError> + 'static,
{
    fn call(&self, ctx: &C, args: &[String]) -> Result<R, HandlerError> {
        (self.func)(ctx, args).map_err(|e| HandlerError::Handler(e.into()))
    }
}

/// A typed function adapted to [`Handler`].
///
/// `M` records the error and parameter types of the wrapped function.
pub struct FnHandler<F, M> {
    func: F,
    _marker: PhantomData<fn() -> M>,
}

impl<F, M> FnHandler<F, M> {
    fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

/// Implements `Handler` and `IntoHandler` for functions with N string parameters.
macro_rules! impl_fn_handler {
    ($($T:ident),*) => {
        impl<C, R, E, F, $($T,)*> Handler<C, R> for FnHandler<F, (E, $($T,)*)>
        where
            F: Fn(&C, $($T,)*) -> Result<R, E> + Send + Sync + 'static,
            E: Into<BoxError> + 'static,
            $( $T: Capture, )*
        {
            #[allow(non_snake_case)]
            fn call(&self, ctx: &C, args: &[String]) -> Result<R, HandlerError> {
                let [$($T,)*] = args else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        expected = count!($($T)*),
                        got = args.len(),
                        "handler argument count mismatch"
                    );
                    return Err(HandlerError::ArgumentCount {
                        expected: count!($($T)*),
                        got: args.len(),
                    });
                };
                (self.func)(ctx, $(<$T as Capture>::from_capture($T.clone()),)*)
                    .map_err(|e| HandlerError::Handler(e.into()))
            }

            fn arity(&self) -> Option<usize> {
                Some(count!($($T)*))
            }
        }

        impl<C, R, E, F, $($T,)*> IntoHandler<C, R, (E, $($T,)*)> for F
        where
            F: Fn(&C, $($T,)*) -> Result<R, E> + Send + Sync + 'static,
            E: Into<BoxError> + 'static,
            $( $T: Capture, )*
        {
            type Handler = FnHandler<F, (E, $($T,)*)>;

            fn into_handler(self) -> Self::Handler {
                FnHandler::new(self)
            }
        }
    };
}

impl_fn_handler!();
impl_fn_handler!(T1);
impl_fn_handler!(T1, T2);
impl_fn_handler!(T1, T2, T3);
impl_fn_handler!(T1, T2, T3, T4);
impl_fn_handler!(T1, T2, T3, T4, T5);
impl_fn_handler!(T1, T2, T3, T4, T5, T6);
impl_fn_handler!(T1, T2, T3, T4, T5, T6, T7);
impl_fn_handler!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_fn_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_fn_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_fn_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_fn_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
