//! Core type definitions for Scriptbridge
//!
//! These types describe what a single rule line was recognized as and what
//! it was converted into.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

// =============================================================================
// Dialects
// =============================================================================

/// Rule syntax a line was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// uBlock Origin scriptlet injection (`##+js(...)`, `##script:inject(...)`)
    UboScriptlet,
    /// AdBlock Plus snippet (`#$#...`)
    AbpSnippet,
    /// Anything else, passed through untouched
    Native,
}

impl Dialect {
    /// Prefix attached to the scriptlet name, without the trailing dash.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::UboScriptlet => Some("ubo"),
            Self::AbpSnippet => Some("abp"),
            Self::Native => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UboScriptlet => "ubo-scriptlet",
            Self::AbpSnippet => "abp-snippet",
            Self::Native => "native",
        }
    }
}

// =============================================================================
// Conversion Result
// =============================================================================

/// Result of converting a single rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion<'a> {
    /// No dialect marker matched; the input line verbatim
    Unchanged(&'a str),
    /// A uBO scriptlet rule rendered as one canonical line
    Scriptlet(String),
    /// An ABP snippet rule rendered as one canonical line per statement
    Snippets(Vec<String>),
}

impl<'a> Conversion<'a> {
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Unchanged(_) => Dialect::Native,
            Self::Scriptlet(_) => Dialect::UboScriptlet,
            Self::Snippets(_) => Dialect::AbpSnippet,
        }
    }

    pub fn is_converted(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }

    /// Borrowed view of every output line, in order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Unchanged(rule) => vec![*rule],
            Self::Scriptlet(line) => vec![line.as_str()],
            Self::Snippets(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Unchanged(rule) => vec![String::from(rule)],
            Self::Scriptlet(line) => vec![line],
            Self::Snippets(lines) => lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_tags() {
        assert_eq!(Dialect::UboScriptlet.tag(), Some("ubo"));
        assert_eq!(Dialect::AbpSnippet.tag(), Some("abp"));
        assert_eq!(Dialect::Native.tag(), None);
    }

    #[test]
    fn test_conversion_lines() {
        let unchanged = Conversion::Unchanged("example.com##.ad");
        assert_eq!(unchanged.lines(), vec!["example.com##.ad"]);
        assert_eq!(unchanged.dialect(), Dialect::Native);
        assert!(!unchanged.is_converted());

        let snippets = Conversion::Snippets(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(snippets.lines(), vec!["a", "b"]);
        assert_eq!(snippets.dialect(), Dialect::AbpSnippet);
        assert_eq!(snippets.into_lines(), vec!["a".to_string(), "b".to_string()]);
    }
}
