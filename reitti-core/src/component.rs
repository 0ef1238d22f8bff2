//! Segment matchers.
//!
//! A compiled template is a sequence of [`Component`]s, one per `/`-delimited
//! segment. Literals compare byte-for-byte; parameters accept anything and
//! capture it.

use std::fmt;

/// Matcher for a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Matches only the exact text (case-sensitive).
    Literal(String),
    /// Matches any segment, including the empty one, and captures it.
    ///
    /// The name is informational; captures are positional.
    Parameter(String),
}

impl Component {
    /// Test one segment.
    ///
    /// Returns `None` on mismatch. On success a parameter yields the segment
    /// itself and a literal yields an empty capture.
    pub fn match_segment<'s>(&self, segment: &'s str) -> Option<&'s str> {
        match self {
            Component::Literal(text) => (segment == text).then_some(""),
            Component::Parameter(_) => Some(segment),
        }
    }

    /// Returns true for [`Component::Parameter`].
    pub fn is_parameter(&self) -> bool {
        matches!(self, Component::Parameter(_))
    }

    /// The parameter name, if this is a parameter.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Component::Parameter(name) => Some(name),
            Component::Literal(_) => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Literal(text) => f.write_str(text),
            Component::Parameter(name) => write!(f, "{{{name}}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_exact() {
        let lit = Component::Literal("repos".to_string());
        assert_eq!(lit.match_segment("repos"), Some(""));
        assert_eq!(lit.match_segment("Repos"), None);
        assert_eq!(lit.match_segment("repos "), None);
        assert_eq!(lit.match_segment(""), None);
    }

    #[test]
    fn test_empty_literal_matches_only_empty() {
        let lit = Component::Literal(String::new());
        assert_eq!(lit.match_segment(""), Some(""));
        assert_eq!(lit.match_segment("x"), None);
    }

    #[test]
    fn test_parameter_captures_anything() {
        let param = Component::Parameter("owner".to_string());
        assert_eq!(param.match_segment("wolverian"), Some("wolverian"));
        assert_eq!(param.match_segment(""), Some(""));
        assert!(param.is_parameter());
        assert_eq!(param.param_name(), Some("owner"));
    }

    #[test]
    fn test_display_round_trips_syntax() {
        assert_eq!(Component::Literal("issues".into()).to_string(), "issues");
        assert_eq!(Component::Parameter("repo".into()).to_string(), "{repo}");
    }
}
