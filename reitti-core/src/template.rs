//! Route template compiler.
//!
//! Templates are split on [`SEPARATOR`]; a segment wrapped in braces
//! (`{owner}`) becomes a [`Component::Parameter`], anything else a
//! [`Component::Literal`]. Empty segments are kept as empty literals, so
//! `"a//b"` has three segments and `""` has one.

use crate::component::Component;
use std::{convert::Infallible, fmt, str::FromStr};

/// Segment separator for templates and names.
pub const SEPARATOR: char = '/';

const PARAM_OPEN: char = '{';
const PARAM_CLOSE: char = '}';

/// A compiled route template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    components: Vec<Component>,
}

impl Template {
    /// Compile a template string. Compilation never fails.
    pub fn compile(template: &str) -> Self {
        let components = template.split(SEPARATOR).map(classify).collect();
        Self {
            source: template.to_string(),
            components,
        }
    }

    /// The text this template was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Compiled segments, in order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false; even the empty template has one segment.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of parameter segments, i.e. the capture count of a match.
    pub fn param_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_parameter()).count()
    }

    /// Parameter names in left-to-right order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().filter_map(Component::param_name)
    }
}

fn classify(part: &str) -> Component {
    match part
        .strip_prefix(PARAM_OPEN)
        .and_then(|rest| rest.strip_suffix(PARAM_CLOSE))
    {
        Some(name) => Component::Parameter(name.to_string()),
        None => Component::Literal(part.to_string()),
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Template::compile(s))
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Template::compile(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
