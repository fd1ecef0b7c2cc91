use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use sb_compiler::{convert_reader, ConvertStats, ConvertedList};

/// Read marker for standard input.
pub const STDIN_PATH: &str = "-";

pub struct ListOutcome {
    pub path: String,
    pub stats: ConvertStats,
}

pub struct ConvertOutcome {
    pub lines: Vec<String>,
    pub lists: Vec<ListOutcome>,
    pub total: ConvertStats,
    pub total_ms: f64,
}

pub fn convert_inputs(inputs: &[String], verbose: bool) -> Result<ConvertOutcome, String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    let start = Instant::now();
    let mut lines = Vec::new();
    let mut lists = Vec::with_capacity(inputs.len());
    let mut total = ConvertStats::default();

    for (list_id, path) in inputs.iter().enumerate() {
        let converted = read_and_convert(path)?;

        if verbose {
            eprintln!(
                "  [{}] {} - {} lines, {} converted ({} uBO, {} ABP -> {} lines)",
                list_id,
                display_name(path),
                converted.stats.lines,
                converted.stats.converted_rules(),
                converted.stats.ubo_rules,
                converted.stats.abp_rules,
                converted.stats.abp_statements
            );
        }

        total.merge(&converted.stats);
        lists.push(ListOutcome {
            path: path.clone(),
            stats: converted.stats,
        });
        lines.extend(converted.lines);
    }

    Ok(ConvertOutcome {
        lines,
        lists,
        total,
        total_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

fn read_and_convert(path: &str) -> Result<ConvertedList, String> {
    if path == STDIN_PATH {
        let stdin = io::stdin();
        return convert_reader(stdin.lock()).map_err(|e| format!("Failed to read stdin: {}", e));
    }

    let file = fs::File::open(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    convert_reader(io::BufReader::new(file)).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

fn display_name(path: &str) -> String {
    if path == STDIN_PATH {
        return "<stdin>".to_string();
    }
    Path::new(path)
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

pub fn write_lines(output: Option<&str>, lines: &[String]) -> Result<(), String> {
    match output {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
            }
            let mut file = io::BufWriter::new(
                fs::File::create(path).map_err(|e| format!("Failed to create '{}': {}", path.display(), e))?,
            );
            write_all_lines(&mut file, lines).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_all_lines(&mut out, lines).map_err(|e| format!("Failed to write stdout: {}", e))
        }
    }
}

fn write_all_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
