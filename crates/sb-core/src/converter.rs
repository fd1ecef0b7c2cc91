//! Rule converter
//!
//! Rewrites uBO scriptlet rules and ABP snippet rules into canonical
//! `domains#%#//scriptlet(args)` lines. Every other line passes through.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::body::{abp_statements, ubo_arguments};
use crate::dialect::{detect, split_at_marker};
use crate::normalize::normalize_arguments;
use crate::template::{join_arguments, render};
use crate::types::{Conversion, Dialect};

/// Convert one rule line.
///
/// Never fails: malformed scriptlet rules degrade to well-formed but
/// possibly empty calls.
pub fn convert_rule(rule: &str) -> Conversion<'_> {
    match detect(rule) {
        Dialect::UboScriptlet => {
            let (domains, _) = split_at_marker(rule, Dialect::UboScriptlet);
            let args = normalize_arguments(&ubo_arguments(rule), Dialect::UboScriptlet);
            Conversion::Scriptlet(render(domains, &join_arguments(&args)))
        }
        Dialect::AbpSnippet => {
            let (domains, body) = split_at_marker(rule, Dialect::AbpSnippet);
            let lines: Vec<_> = abp_statements(body)
                .iter()
                .map(|statement| {
                    let args = normalize_arguments(statement, Dialect::AbpSnippet);
                    render(domains, &join_arguments(&args))
                })
                .collect();
            Conversion::Snippets(lines)
        }
        Dialect::Native => Conversion::Unchanged(rule),
    }
}
