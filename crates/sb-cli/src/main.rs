//! Scriptbridge CLI
//!
//! CLI tool for converting uBO/ABP scriptlet rules into canonical syntax.

mod convert;
mod report;

use std::fs;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sb_compiler::is_comment_line;
use sb_core::{convert_rule, detect, Dialect};

#[derive(Parser)]
#[command(name = "sb-cli")]
#[command(about = "Scriptbridge scriptlet rule converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert filter lists into canonical scriptlet syntax
    Convert {
        /// Input filter list files ("-" reads stdin)
        #[arg(short, long, required = true)]
        input: Vec<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Convert a single rule and print the result
    Rule {
        /// Rule text
        rule: String,
    },

    /// Count scriptlet rules per dialect
    Detect {
        /// Input filter list files
        #[arg(short, long, required = true)]
        input: Vec<String>,

        /// Print every scriptlet rule with its dialect
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(
        &cli.command,
        Commands::Convert { verbose: true, .. } | Commands::Detect { verbose: true, .. }
    );
    init_logging(verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            json,
            verbose,
        } => cmd_convert(&input, output.as_deref(), json, verbose),
        Commands::Rule { rule } => cmd_rule(&rule),
        Commands::Detect { input, verbose } => cmd_detect(&input, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// `--verbose` enables DEBUG, otherwise use RUST_LOG or default to WARN.
fn log_directive(verbose: bool, env: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn init_logging(verbose: bool) {
    let directive = log_directive(verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout may carry converted lines; `log` records reach this subscriber through tracing-log.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_convert(inputs: &[String], output: Option<&str>, json: bool, verbose: bool) -> Result<(), String> {
    let outcome = convert::convert_inputs(inputs, verbose)?;
    convert::write_lines(output, &outcome.lines)?;

    let summary = if json {
        report::render_json(&outcome)?
    } else {
        report::render_text(&outcome)
    };

    // Converted lines own stdout when no output file is given.
    if output.is_some() {
        println!("{}", summary);
    } else {
        eprintln!("{}", summary);
    }

    Ok(())
}

fn cmd_rule(rule: &str) -> Result<(), String> {
    let rule = rule.trim();
    if rule.is_empty() {
        return Err("Empty rule".to_string());
    }

    for line in convert_rule(rule).lines() {
        println!("{}", line);
    }

    Ok(())
}

fn cmd_detect(inputs: &[String], verbose: bool) -> Result<(), String> {
    let mut ubo = 0usize;
    let mut abp = 0usize;
    let mut native = 0usize;

    for path in inputs {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path, e))?;

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || is_comment_line(line) {
                continue;
            }

            let dialect = detect(line);
            match dialect {
                Dialect::UboScriptlet => ubo += 1,
                Dialect::AbpSnippet => abp += 1,
                Dialect::Native => native += 1,
            }

            if verbose && dialect != Dialect::Native {
                println!("{}:{}: [{}] {}", path, idx + 1, dialect.as_str(), line);
            }
        }
    }

    println!("Rules in {} list(s):", inputs.len());
    println!("  uBO scriptlets:  {}", ubo);
    println!("  ABP snippets:    {}", abp);
    println!("  Native:          {}", native);

    Ok(())
}
