use std::io::BufRead;

use sb_core::{convert_rule, Conversion};

/// Error type for reading filter lists.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Per-list conversion counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Input lines seen
    pub lines: usize,
    /// Empty or whitespace-only input lines
    pub blank: usize,
    /// `!` comments and `[Adblock Plus ...]` headers
    pub comments: usize,
    /// Rules passed through unchanged
    pub native: usize,
    /// uBO scriptlet rules converted
    pub ubo_rules: usize,
    /// ABP snippet rules converted
    pub abp_rules: usize,
    /// Canonical lines produced from ABP snippet rules
    pub abp_statements: usize,
    /// Lines written to the output
    pub output_lines: usize,
}

impl ConvertStats {
    pub fn converted_rules(&self) -> usize {
        self.ubo_rules + self.abp_rules
    }

    pub fn merge(&mut self, other: &ConvertStats) {
        self.lines += other.lines;
        self.blank += other.blank;
        self.comments += other.comments;
        self.native += other.native;
        self.ubo_rules += other.ubo_rules;
        self.abp_rules += other.abp_rules;
        self.abp_statements += other.abp_statements;
        self.output_lines += other.output_lines;
    }
}

/// A converted filter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedList {
    pub lines: Vec<String>,
    pub stats: ConvertStats,
}

/// Incremental list converter, fed one line at a time.
#[derive(Debug, Default)]
pub struct ListConverter {
    lines: Vec<String>,
    stats: ConvertStats,
}

impl ListConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, raw_line: &str) {
        self.stats.lines += 1;
        let line = raw_line.trim();

        if line.is_empty() {
            self.stats.blank += 1;
            self.emit(String::new());
            return;
        }

        if is_comment_line(line) {
            self.stats.comments += 1;
            self.emit(line.to_string());
            return;
        }

        match convert_rule(line) {
            Conversion::Unchanged(rule) => {
                self.stats.native += 1;
                self.emit(rule.to_string());
            }
            Conversion::Scriptlet(converted) => {
                self.stats.ubo_rules += 1;
                log::trace!("{} -> {}", line, converted);
                self.emit(converted);
            }
            Conversion::Snippets(converted) => {
                self.stats.abp_rules += 1;
                self.stats.abp_statements += converted.len();
                for statement in converted {
                    log::trace!("{} -> {}", line, statement);
                    self.emit(statement);
                }
            }
        }
    }

    pub fn finish(self) -> ConvertedList {
        log::debug!(
            "converted list: {} lines, {} uBO, {} ABP ({} statements), {} native",
            self.stats.lines,
            self.stats.ubo_rules,
            self.stats.abp_rules,
            self.stats.abp_statements,
            self.stats.native
        );
        ConvertedList {
            lines: self.lines,
            stats: self.stats,
        }
    }

    fn emit(&mut self, line: String) {
        self.stats.output_lines += 1;
        self.lines.push(line);
    }
}

/// Convert every scriptlet rule in a filter list.
///
/// Blank lines and comments are kept in place; all other lines go through
/// `convert_rule`, and ABP rules expand to one line per statement.
pub fn convert_filter_list(text: &str) -> ConvertedList {
    let mut converter = ListConverter::new();
    for raw_line in text.lines() {
        converter.push_line(raw_line);
    }
    converter.finish()
}

/// Convert a filter list read line by line.
pub fn convert_reader<R: BufRead>(reader: R) -> Result<ConvertedList, ListError> {
    let mut converter = ListConverter::new();
    for (idx, raw_line) in reader.lines().enumerate() {
        let raw_line = raw_line.map_err(|source| ListError::Io {
            line: idx + 1,
            source,
        })?;
        converter.push_line(&raw_line);
    }
    Ok(converter.finish())
}

/// `!` comments and `[Adblock Plus 2.0]` style list headers.
///
/// A leading `[` alone is not enough: `[$path=/x]example.com##...` is a rule.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with('!') || (line.starts_with('[') && line.ends_with(']'))
}
