//! Canonical scriptlet rule rendering

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Canonical scriptlet rule mask.
pub const SCRIPTLET_MASK: &str = "${domains}#%#//scriptlet(${args})";

const DOMAINS_PLACEHOLDER: &str = "${domains}";
const ARGS_PLACEHOLDER: &str = "${args}";
const PLACEHOLDER_OPEN: &str = "${";

/// Render a canonical scriptlet rule.
pub fn render(domains: &str, args: &str) -> String {
    render_mask(SCRIPTLET_MASK, domains, args)
}

/// Substitute every `${domains}` and `${args}` in `mask`.
///
/// The mask is scanned once, left to right; substituted text is never
/// scanned again. Unknown `${...}` sequences are copied as-is.
pub fn render_mask(mask: &str, domains: &str, args: &str) -> String {
    let mut out = String::with_capacity(mask.len() + domains.len() + args.len());
    let mut rest = mask;

    while let Some(pos) = rest.find(PLACEHOLDER_OPEN) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix(DOMAINS_PLACEHOLDER) {
            out.push_str(domains);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ARGS_PLACEHOLDER) {
            out.push_str(args);
            rest = after;
        } else {
            out.push_str(PLACEHOLDER_OPEN);
            rest = &tail[PLACEHOLDER_OPEN.len()..];
        }
    }

    out.push_str(rest);
    out
}

/// Join normalized arguments for the `${args}` placeholder.
pub fn join_arguments(args: &[String]) -> String {
    args.join(", ")
}
