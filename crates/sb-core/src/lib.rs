//! Scriptbridge Core Library
//!
//! This crate translates third-party scriptlet rule dialects into the
//! canonical `domains#%#//scriptlet(args)` syntax. It is designed to be
//! `no_std` compatible (with `alloc`) so the same code runs natively and in
//! the browser build.
//!
//! # Dialects
//!
//! - uBlock Origin: `example.com##+js(name, arg1, arg2)` or
//!   `example.com##script:inject(name, arg1)`
//! - AdBlock Plus: `example.com#$#name 'arg1' arg2; name2 arg`
//!
//! Any other line is returned unchanged. Conversion is pure and never fails.
//!
//! # Modules
//!
//! - `scanner`: Quote-aware splitting and tokenization
//! - `dialect`: Marker detection and domain/body splitting
//! - `body`: Per-dialect argument extraction
//! - `normalize`: Argument quoting and dialect tagging
//! - `template`: Canonical rule rendering
//! - `converter`: The `convert_rule` entry point
//! - `types`: Shared type definitions

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod body;
pub mod converter;
pub mod dialect;
pub mod normalize;
pub mod scanner;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use converter::convert_rule;
pub use dialect::{detect, is_abp_snippet_rule, is_ubo_scriptlet_rule};
pub use template::SCRIPTLET_MASK;
pub use types::{Conversion, Dialect};
