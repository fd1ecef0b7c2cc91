//! Scriptbridge Filter List Converter
//!
//! This crate converts whole uBO/ABP filter lists into canonical scriptlet syntax.

pub mod list;

pub use list::{
    convert_filter_list, convert_reader, is_comment_line, ConvertStats, ConvertedList, ListConverter, ListError,
};
