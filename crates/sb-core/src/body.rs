//! Rule body parsing
//!
//! uBO rules carry one parenthesised, comma-separated call. ABP rules carry a
//! semicolon-separated list of whitespace-separated snippet calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::scanner::{split_statements, tokenize};

/// Separator between uBO scriptlet arguments.
pub const UBO_ARGUMENT_SEPARATOR: &str = ", ";

/// Extract the raw uBO scriptlet arguments from a whole rule line.
///
/// The call is taken between the first `(` and the last `)` of the entire
/// line and split on `", "`. Parentheses are not balanced, so nested
/// parentheses inside an argument are not supported. A line without a
/// `(`...`)` pair yields a single empty argument.
pub fn ubo_arguments(rule: &str) -> Vec<&str> {
    ubo_call_contents(rule).split(UBO_ARGUMENT_SEPARATOR).collect()
}

fn ubo_call_contents(rule: &str) -> &str {
    let open = match rule.find('(') {
        Some(open) => open,
        None => {
            log::debug!("scriptlet rule without call arguments: {}", rule);
            return "";
        }
    };

    match rule.rfind(')') {
        Some(close) if close > open => &rule[open + 1..close],
        _ => {
            log::debug!("scriptlet rule with unterminated call: {}", rule);
            ""
        }
    }
}

/// Parse an ABP snippet body into one argument list per statement.
///
/// Statements that contain no tokens are kept as empty lists.
pub fn abp_statements(body: &str) -> Vec<Vec<&str>> {
    split_statements(body)
        .into_iter()
        .map(|statement| {
            let args = tokenize(statement);
            if args.is_empty() {
                log::debug!("empty snippet statement in: {}", body);
            }
            args
        })
        .collect()
}
