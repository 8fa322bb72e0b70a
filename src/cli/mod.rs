use crate::generator::{render_summary, DEFAULT_OUTPUT};
use crate::scanner::{self, IndicatorTables, TemplateScanner};
use crate::ui;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "tmplscan")]
#[command(
    version,
    about = "Generate an on-demand context file that references a project template",
    after_help = "Examples:\n  \
        tmplscan .template/genai-launchpad weather-ai-app\n  \
        tmplscan .template/genai-launchpad weather-ai-app \"weather app with Open-Meteo and OpenAI services\"\n  \
        tmplscan ~/templates/fastapi-template my-api \"REST API with auth using PostgreSQL\""
)]
pub struct Args {
    /// Template directory to scan
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Project display name
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// What the new project should do (defaults to the detected purpose)
    #[arg(value_name = "USE_CASE")]
    pub use_case: Option<String>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// TOML file overriding the built-in indicator tables
    #[arg(short, long, value_name = "FILE", env = "TMPLSCAN_TABLES")]
    pub tables: Option<PathBuf>,

    /// Print the scan results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run (render without writing the output file)
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.verbose && !self.quiet {
            "debug"
        } else {
            "warn"
        }
    }

    pub fn use_case(&self) -> Option<&str> {
        self.use_case.as_deref().filter(|u| !u.trim().is_empty())
    }
}

pub fn run(args: &Args) -> Result<()> {
    if !args.quiet {
        ui::print_header();
    }

    scanner::validate_root(&args.template)?;

    if !args.quiet {
        ui::print_inputs(&args.template, &args.project, args.use_case());
    }

    generate(args).with_context(|| format!("Error generating {}", args.output.display()))
}

fn load_tables(args: &Args) -> Result<IndicatorTables> {
    match &args.tables {
        Some(path) => {
            debug!("Loading indicator tables from {}", path.display());
            Ok(IndicatorTables::from_toml_file(path)?)
        }
        None => Ok(IndicatorTables::default()),
    }
}

fn scanning_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.yellow} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Scanning template structure...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn generate(args: &Args) -> Result<()> {
    let tables = load_tables(args)?;
    let scanner = TemplateScanner::with_tables(&args.template, tables)?;

    let spinner = scanning_spinner(args.quiet);
    let scanned = scanner.scan();
    spinner.finish_and_clear();
    let profile = scanned?;

    let content = render_summary(&profile, &args.project, args.use_case());

    if !args.dry_run {
        fs::write(&args.output, &content)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
    }

    if !args.quiet {
        ui::print_result(&args.output, &content, !args.dry_run);
        if !args.dry_run {
            ui::print_next_steps(&args.output);
        }
        ui::print_line_check(&args.output, &content);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&profile).context("Failed to serialize scan results")?;
        println!("{}", json);
    }

    Ok(())
}
