//! PDF Forensic Sanitizer - Command-line Interface
//! Author: kartik4091
//! Created: 2025-06-06
//!
//! Line-mode front end: takes one PDF path, prints progress lines to stdout,
//! then prints the output path and a summary of what changed.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use pdfscrub::utils::{init_logging, LogLevel};
use pdfscrub::{sanitize_in_background, Category, ReportFormat, ReportFormatter, SanitizeOptions};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<CliLogLevel>("verbose")
        .copied()
        .unwrap_or(CliLogLevel::Warn);
    init_logging(log_level.into());

    let pause = matches.get_flag("pause");
    let code = match run(&matches).await {
        Ok(()) => 0,
        Err(message) => {
            println!("\n[ERROR] {}", message);
            1
        }
    };

    if waits_for_acknowledgement(pause, code != 0) {
        println!("\nPress Enter to exit...");
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
    process::exit(code);
}

async fn run(matches: &ArgMatches) -> Result<(), String> {
    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .ok_or_else(|| "No input file given".to_string())?;
    let output = matches.get_one::<PathBuf>("output").cloned();
    let quiet = matches.get_flag("quiet");

    if !input.is_file() {
        return Err(format!("Input file does not exist: {}", input.display()));
    }
    if !matches.get_flag("force") && !has_pdf_extension(&input) {
        return Err(format!(
            "Not a .pdf file: {} (use --force to process it anyway)",
            input.display()
        ));
    }

    let options = resolve_options(matches)?;
    if !options.any_enabled() {
        return Err("Please select at least one category".to_string());
    }
    debug!("Enabled categories: {:?}", options.enabled());

    println!("{}", "=".repeat(50));
    println!("PDF Forensic Sanitizer");
    println!("{}", "=".repeat(50));
    println!("\nProcessing: {}", input.display());

    let progress = move |percent: u8, message: &str| {
        if !quiet {
            println!("  [{:3}%] {}", percent, message);
        }
    };

    let outcome = sanitize_in_background(options, input, output, progress)
        .await
        .map_err(|e| {
            error!("Sanitization failed: {}", e);
            e.to_string()
        })?;

    info!("Output written to {}", outcome.output_path.display());
    println!("\n[OK] Success! Output: {}", outcome.output_path.display());
    if !quiet {
        println!();
        print!(
            "{}",
            ReportFormatter::format(&outcome.report, &outcome.output_path, ReportFormat::PlainText)
        );
    }

    if let Some(report_path) = matches.get_one::<PathBuf>("report") {
        let json = ReportFormatter::format(&outcome.report, &outcome.output_path, ReportFormat::Json);
        fs::write(report_path, json)
            .map_err(|e| format!("Failed to write report {}: {}", report_path.display(), e))?;
        println!("Report: {}", report_path.display());
    }

    Ok(())
}

/// Errors always wait for Enter so the message stays readable; success only
/// with --pause
fn waits_for_acknowledgement(pause: bool, failed: bool) -> bool {
    pause || failed
}

/// Config file (or all categories), narrowed by --only, then --skip
fn resolve_options(matches: &ArgMatches) -> Result<SanitizeOptions, String> {
    let mut options = match matches.get_one::<PathBuf>("config") {
        Some(path) => SanitizeOptions::from_file(path).map_err(|e| e.to_string())?,
        None => SanitizeOptions::default(),
    };

    if let Some(only) = matches.get_many::<Category>("only") {
        let selected: Vec<Category> = only.copied().collect();
        options = options.restrict_to(&selected);
    }

    if let Some(skip) = matches.get_many::<Category>("skip") {
        for &category in skip {
            options = options.with(category, false);
        }
    }

    Ok(options)
}

fn category_help(verb: &str) -> String {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.report_key()).collect();
    format!("{} these categories: {}", verb, names.join(", "))
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

fn build_cli() -> Command {
    Command::new("pdfscrub")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove metadata and forensic traces from PDF files")
        .long_about(
            "Strips author, creator, producer, title and subject strings, resets \
             creation/modification dates, removes timezone offsets, zeroes the \
             document ID, rewrites /Lang(he) tags (including inside compressed \
             streams) and clears XMP fields. The file is treated as bytes and \
             only the matched values are rewritten.",
        )
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("PDF file to sanitize")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Output path (default: <name>_sanitized.pdf next to the input)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Option set file (JSON/YAML) with remove_* keys"),
        )
        .arg(
            Arg::new("only")
                .long("only")
                .value_name("CATEGORY")
                .value_parser(Category::from_str)
                .action(ArgAction::Append)
                .help(category_help("Sanitize only")),
        )
        .arg(
            Arg::new("skip")
                .long("skip")
                .value_name("CATEGORY")
                .value_parser(Category::from_str)
                .action(ArgAction::Append)
                .help(category_help("Leave untouched")),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the change report as JSON"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Process files without a .pdf extension"),
        )
        .arg(
            Arg::new("pause")
                .long("pause")
                .action(ArgAction::SetTrue)
                .help("Wait for Enter before exiting after success too"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only print the result line"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_name("LEVEL")
                .value_parser(clap::value_parser!(CliLogLevel))
                .default_value("warn")
                .help("Log level for diagnostics on stderr"),
        )
}
