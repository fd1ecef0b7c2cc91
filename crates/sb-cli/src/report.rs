use serde::Serialize;

use sb_compiler::ConvertStats;

use crate::convert::ConvertOutcome;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    pub native: usize,
    pub ubo_rules: usize,
    pub abp_rules: usize,
    pub abp_statements: usize,
    pub output_lines: usize,
}

impl From<&ConvertStats> for StatsReport {
    fn from(stats: &ConvertStats) -> Self {
        Self {
            lines: stats.lines,
            blank: stats.blank,
            comments: stats.comments,
            native: stats.native,
            ubo_rules: stats.ubo_rules,
            abp_rules: stats.abp_rules,
            abp_statements: stats.abp_statements,
            output_lines: stats.output_lines,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListReport {
    pub path: String,
    #[serde(flatten)]
    pub stats: StatsReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertReport {
    pub lists: Vec<ListReport>,
    pub total: StatsReport,
    pub total_ms: f64,
}

impl From<&ConvertOutcome> for ConvertReport {
    fn from(outcome: &ConvertOutcome) -> Self {
        Self {
            lists: outcome
                .lists
                .iter()
                .map(|list| ListReport {
                    path: list.path.clone(),
                    stats: StatsReport::from(&list.stats),
                })
                .collect(),
            total: StatsReport::from(&outcome.total),
            total_ms: outcome.total_ms,
        }
    }
}

pub fn render_json(outcome: &ConvertOutcome) -> Result<String, String> {
    serde_json::to_string_pretty(&ConvertReport::from(outcome))
        .map_err(|e| format!("Failed to serialize report: {}", e))
}

pub fn render_text(outcome: &ConvertOutcome) -> String {
    let total = &outcome.total;
    let mut out = String::new();
    out.push_str(&format!("Converted {} filter list(s)\n", outcome.lists.len()));
    out.push_str(&format!("  Lines:    {} -> {}\n", total.lines, total.output_lines));
    out.push_str(&format!(
        "  Rules:    {} uBO, {} ABP ({} statements), {} native\n",
        total.ubo_rules, total.abp_rules, total.abp_statements, total.native
    ));
    out.push_str(&format!("  Skipped:  {} comments, {} blank\n", total.comments, total.blank));
    out.push_str(&format!("  Time:     {:.1}ms", outcome.total_ms));
    out
}
