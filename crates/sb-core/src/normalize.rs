//! Argument normalization
//!
//! Every argument ends up wrapped in double quotes. The first argument is the
//! scriptlet name and gets the dialect prefix (`ubo-` or `abp-`).

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::types::Dialect;

/// Tag the scriptlet name and double-quote every argument.
///
/// Embedded double quotes are copied through unescaped.
pub fn normalize_arguments(args: &[&str], dialect: Dialect) -> Vec<String> {
    args.iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 {
                let mut tagged = String::with_capacity(arg.len() + 4);
                if let Some(tag) = dialect.tag() {
                    tagged.push_str(tag);
                    tagged.push('-');
                }
                tagged.push_str(arg);
                wrap_in_double_quotes(&tagged)
            } else {
                wrap_in_double_quotes(arg)
            }
        })
        .collect()
}

/// Strip one layer of single quotes, if present, and wrap in double quotes.
pub fn wrap_in_double_quotes(arg: &str) -> String {
    let inner = strip_single_quotes(arg);
    let mut out = String::with_capacity(inner.len() + 2);
    out.push('"');
    out.push_str(inner);
    out.push('"');
    out
}

fn strip_single_quotes(arg: &str) -> &str {
    if arg.len() >= 2 && arg.starts_with('\'') && arg.ends_with('\'') {
        &arg[1..arg.len() - 1]
    } else {
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_double_quotes() {
        assert_eq!(wrap_in_double_quotes("foo"), "\"foo\"");
        assert_eq!(wrap_in_double_quotes("'foo'"), "\"foo\"");
        assert_eq!(wrap_in_double_quotes("''"), "\"\"");
        assert_eq!(wrap_in_double_quotes(""), "\"\"");
        assert_eq!(wrap_in_double_quotes("'"), "\"'\"");
    }

    #[test]
    fn test_wrap_strips_one_layer_only() {
        assert_eq!(wrap_in_double_quotes("''foo''"), "\"'foo'\"");
        assert_eq!(wrap_in_double_quotes("'foo"), "\"'foo\"");
    }

    #[test]
    fn test_wrap_leaves_double_quotes_alone() {
        assert_eq!(wrap_in_double_quotes("\"foo\""), "\"\"foo\"\"");
        assert_eq!(wrap_in_double_quotes("a\"b"), "\"a\"b\"");
    }

    #[test]
    fn test_normalize_tags_first_argument() {
        assert_eq!(
            normalize_arguments(&["set-constant.js", "foo", "bar"], Dialect::UboScriptlet),
            vec!["\"ubo-set-constant.js\"", "\"foo\"", "\"bar\""]
        );
        assert_eq!(
            normalize_arguments(&["log", "'a b'"], Dialect::AbpSnippet),
            vec!["\"abp-log\"", "\"a b\""]
        );
    }

    #[test]
    fn test_normalize_quoted_name() {
        // The tag is prepended before quote stripping, so the quotes survive.
        assert_eq!(
            normalize_arguments(&["'log'"], Dialect::AbpSnippet),
            vec!["\"abp-'log'\""]
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_arguments(&[], Dialect::AbpSnippet).is_empty());
        assert_eq!(normalize_arguments(&[""], Dialect::UboScriptlet), vec!["\"ubo-\""]);
    }
}
