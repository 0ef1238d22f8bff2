//! A compiled template paired with its handler.

use crate::{
    handler::{BoxHandler, Handler},
    template::{SEPARATOR, Template},
};
use std::fmt;

/// One registered route.
///
/// Routes are immutable once built; the router only reads them.
pub struct Route<C, R> {
    template: Template,
    handler: BoxHandler<C, R>,
}

impl<C, R> Route<C, R> {
    /// Pair a compiled template with a handler.
    pub fn new<H>(template: Template, handler: H) -> Self
    where
        H: Handler<C, R>,
    {
        Self {
            template,
            handler: Box::new(handler),
        }
    }

    /// The compiled template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The adapted handler.
    pub fn handler(&self) -> &dyn Handler<C, R> {
        self.handler.as_ref()
    }

    /// Test `name` against this route.
    ///
    /// Returns the captures in template order, one per parameter segment,
    /// or `None` if the segment counts differ or any literal mismatches.
    pub fn match_name(&self, name: &str) -> Option<Vec<String>> {
        if name.split(SEPARATOR).count() != self.template.len() {
            return None;
        }

        let mut captures = Vec::with_capacity(self.template.param_count());
        for (component, part) in self.template.components().iter().zip(name.split(SEPARATOR)) {
            let captured = component.match_segment(part)?;
            if component.is_parameter() {
                captures.push(captured.to_string());
            }
        }
        Some(captures)
    }
}

impl<C: 'static, R: 'static> fmt::Debug for Route<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template.as_str())
            .field("arity", &self.handler.arity())
            .finish()
    }
}
