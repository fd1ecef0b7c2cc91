//! Dialect detection and marker splitting
//!
//! A uBO scriptlet rule is recognized by `##script:inject` or by `##` followed
//! by optional whitespace and `+js`. An ABP snippet rule is recognized by
//! `#$#`. The uBO check runs first, so a line carrying both markers is treated
//! as uBO.

use crate::types::Dialect;

/// Legacy uBO script injection marker.
pub const UBO_SCRIPT_INJECT_MARKER: &str = "##script:inject";
/// uBO shorthand marker, matched after `##` and optional whitespace.
pub const UBO_JS_MARKER: &str = "+js";
/// ABP snippet marker.
pub const ABP_SNIPPET_MARKER: &str = "#$#";

const HIDE_SEPARATOR: &str = "##";

/// Check whether a rule is a uBO scriptlet rule.
pub fn is_ubo_scriptlet_rule(rule: &str) -> bool {
    find_ubo_marker(rule).is_some()
}

/// Check whether a rule is an ABP snippet rule.
pub fn is_abp_snippet_rule(rule: &str) -> bool {
    find_abp_marker(rule).is_some()
}

/// Classify a rule line.
pub fn detect(rule: &str) -> Dialect {
    if is_ubo_scriptlet_rule(rule) {
        Dialect::UboScriptlet
    } else if is_abp_snippet_rule(rule) {
        Dialect::AbpSnippet
    } else {
        Dialect::Native
    }
}

/// Byte range `(start, end)` of the leftmost marker of `dialect` in `rule`.
pub fn find_marker(rule: &str, dialect: Dialect) -> Option<(usize, usize)> {
    match dialect {
        Dialect::UboScriptlet => find_ubo_marker(rule),
        Dialect::AbpSnippet => find_abp_marker(rule),
        Dialect::Native => None,
    }
}

/// Split a rule into the text before and the text after its marker.
///
/// Without a marker the prefix is empty and the suffix is the whole rule.
pub fn split_at_marker(rule: &str, dialect: Dialect) -> (&str, &str) {
    match find_marker(rule, dialect) {
        Some((start, end)) => (&rule[..start], &rule[end..]),
        None => ("", rule),
    }
}

fn find_ubo_marker(rule: &str) -> Option<(usize, usize)> {
    let mut from = 0;

    // Candidates overlap ("###+js" matches at offset 1), so advance one byte at a time.
    while let Some(pos) = rule[from..].find(HIDE_SEPARATOR) {
        let start = from + pos;
        let rest = &rule[start + HIDE_SEPARATOR.len()..];

        if rest.starts_with(&UBO_SCRIPT_INJECT_MARKER[HIDE_SEPARATOR.len()..]) {
            return Some((start, start + UBO_SCRIPT_INJECT_MARKER.len()));
        }

        let after_space = rest.trim_start();
        if after_space.starts_with(UBO_JS_MARKER) {
            let end = rule.len() - after_space.len() + UBO_JS_MARKER.len();
            return Some((start, end));
        }

        from = start + 1;
    }

    None
}

fn find_abp_marker(rule: &str) -> Option<(usize, usize)> {
    rule.find(ABP_SNIPPET_MARKER)
        .map(|start| (start, start + ABP_SNIPPET_MARKER.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ubo_markers() {
        assert!(is_ubo_scriptlet_rule("example.com##+js(set-constant, a, b)"));
        assert!(is_ubo_scriptlet_rule("example.com##script:inject(noeval.js)"));
        assert!(is_ubo_scriptlet_rule("example.com## +js(noeval)"));
        assert!(is_ubo_scriptlet_rule("##+js(noeval)"));
        assert!(!is_ubo_scriptlet_rule("example.com##.ad-banner"));
        assert!(!is_ubo_scriptlet_rule("example.com#@#+js(noeval)"));
        assert!(!is_ubo_scriptlet_rule("example.com#+js(noeval)"));
    }

    #[test]
    fn test_abp_marker() {
        assert!(is_abp_snippet_rule("example.com#$#log hello"));
        assert!(!is_abp_snippet_rule("example.com##.ad"));
        assert!(!is_abp_snippet_rule("||example.com^$script"));
    }

    #[test]
    fn test_detect_precedence() {
        assert_eq!(detect("a.com##+js(x)"), Dialect::UboScriptlet);
        assert_eq!(detect("a.com#$#log x"), Dialect::AbpSnippet);
        assert_eq!(detect("a.com#$#log ##+js(x)"), Dialect::UboScriptlet);
        assert_eq!(detect("a.com##div"), Dialect::Native);
        assert_eq!(detect(""), Dialect::Native);
    }

    #[test]
    fn test_canonical_output_is_native() {
        assert_eq!(detect("example.com#%#//scriptlet(\"ubo-noeval\")"), Dialect::Native);
    }

    #[test]
    fn test_find_marker_overlapping_hashes() {
        assert_eq!(find_marker("a###+js(x)", Dialect::UboScriptlet), Some((2, 7)));
        assert_eq!(find_marker("a##  +js(x)", Dialect::UboScriptlet), Some((1, 8)));
        assert_eq!(find_marker("a##script:inject(x)", Dialect::UboScriptlet), Some((1, 16)));
        assert_eq!(find_marker("a#$#b", Dialect::AbpSnippet), Some((1, 4)));
        assert_eq!(find_marker("a#$#b", Dialect::Native), None);
    }

    #[test]
    fn test_split_at_marker() {
        assert_eq!(
            split_at_marker("example.com,example.org##+js(noeval)", Dialect::UboScriptlet),
            ("example.com,example.org", "(noeval)")
        );
        assert_eq!(
            split_at_marker("example.com#$#log a; log b", Dialect::AbpSnippet),
            ("example.com", "log a; log b")
        );
        assert_eq!(split_at_marker("#$#log", Dialect::AbpSnippet), ("", "log"));
    }

    #[test]
    fn test_split_without_marker() {
        assert_eq!(split_at_marker("example.com##.ad", Dialect::AbpSnippet), ("", "example.com##.ad"));
        assert_eq!(split_at_marker("plain", Dialect::Native), ("", "plain"));
    }
}
