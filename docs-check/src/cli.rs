use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use docs_check::output::{summary_line, write_json, write_json_all, write_violations};
use docs_check::{
    CheckReport, DEFAULT_SIDEBAR, DuplicatePolicy, FencePolicy, MarkupSafetyConfig,
    NavigationCheckConfig, NavigationConfig, SidebarSelection, check_markup_safety,
    check_navigation,
};

/// Default location of generated meta documents, relative to the project root.
const DEFAULT_META_DIR: &str = "docs/_meta";
/// Default documentation root, relative to the project root.
const DEFAULT_DOCS_ROOT: &str = "docs";
/// Default navigation config, relative to the project root.
const DEFAULT_SIDEBARS_FILE: &str = "sidebars.json";

#[derive(Parser, Debug)]
#[command(
    name = "docs-check",
    version,
    about = "Consistency checks for the documentation site"
)]
pub struct Cli {
    /// Directory the default input paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub project_root: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Check to run; both when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan generated meta docs for raw JSX or expression characters
    Markup(MarkupArgs),
    /// Verify every sidebar doc id resolves to a document
    Navigation(NavigationArgs),
    /// Run both checks
    All(AllArgs),
}

#[derive(Args, Debug, Default)]
pub struct MarkupArgs {
    /// Directory of generated docs [default: docs/_meta]
    #[arg(long)]
    pub meta_dir: Option<PathBuf>,

    /// Do not report code fences that are never closed
    #[arg(long)]
    pub allow_unterminated_fence: bool,
}

#[derive(Args, Debug, Default)]
pub struct NavigationArgs {
    /// Documentation root [default: docs]
    #[arg(long)]
    pub docs_root: Option<PathBuf>,

    /// Navigation config, JSON or YAML [default: sidebars.json]
    #[arg(long)]
    pub sidebars_file: Option<PathBuf>,

    /// Sidebar to verify (defaults to the main docs sidebar)
    #[arg(long, conflicts_with = "all_sidebars")]
    pub sidebar: Option<String>,

    /// Verify every sidebar in the config
    #[arg(long)]
    pub all_sidebars: bool,

    /// Do not report documents sharing an id
    #[arg(long)]
    pub allow_duplicate_ids: bool,
}

#[derive(Args, Debug, Default)]
pub struct AllArgs {
    #[command(flatten)]
    pub markup: MarkupArgs,

    #[command(flatten)]
    pub navigation: NavigationArgs,
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the default `warn` level.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "docs_check=warn",
        1 => "docs_check=info",
        _ => "docs_check=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve(root: &Path, given: Option<&PathBuf>, default: &str) -> PathBuf {
    root.join(given.map_or_else(|| PathBuf::from(default), Clone::clone))
}

fn markup_config(root: &Path, args: &MarkupArgs) -> MarkupSafetyConfig {
    let mut config =
        MarkupSafetyConfig::new(resolve(root, args.meta_dir.as_ref(), DEFAULT_META_DIR));
    if args.allow_unterminated_fence {
        config.fence_policy = FencePolicy::Permissive;
    }
    config
}

fn navigation_config(root: &Path, args: &NavigationArgs) -> NavigationCheckConfig {
    let mut config =
        NavigationCheckConfig::new(resolve(root, args.docs_root.as_ref(), DEFAULT_DOCS_ROOT));
    config.sidebars = if args.all_sidebars {
        SidebarSelection::All
    } else {
        SidebarSelection::Named(
            args.sidebar
                .clone()
                .unwrap_or_else(|| DEFAULT_SIDEBAR.to_owned()),
        )
    };
    if args.allow_duplicate_ids {
        config.duplicate_policy = DuplicatePolicy::Allow;
    }
    config
}

fn run_markup(root: &Path, args: &MarkupArgs) -> Result<CheckReport> {
    let config = markup_config(root, args);
    check_markup_safety(&config).with_context(|| {
        format!("markup safety check on {} failed to run", config.meta_dir.display())
    })
}

fn run_navigation(root: &Path, args: &NavigationArgs) -> Result<CheckReport> {
    let sidebars_file = resolve(root, args.sidebars_file.as_ref(), DEFAULT_SIDEBARS_FILE);
    let navigation = NavigationConfig::load(&sidebars_file)
        .with_context(|| format!("cannot load navigation config {}", sidebars_file.display()))?;
    let config = navigation_config(root, args);
    check_navigation(&config, &navigation).with_context(|| {
        format!("navigation check on {} failed to run", config.docs_root.display())
    })
}

fn print_human(report: &CheckReport) -> Result<()> {
    if report.ok {
        println!("{}", summary_line(report).green());
        return Ok(());
    }
    let mut stderr = std::io::stderr().lock();
    write_violations(report, &mut stderr)?;
    writeln!(stderr, "{}", summary_line(report).red().bold())?;
    Ok(())
}

fn print_reports(reports: &[CheckReport], format: OutputFormat, as_array: bool) -> Result<()> {
    match (format, reports) {
        (OutputFormat::Json, [single]) if !as_array => {
            write_json(single, &mut std::io::stdout().lock())
        }
        (OutputFormat::Json, _) => write_json_all(reports, &mut std::io::stdout().lock()),
        (OutputFormat::Human, _) => reports.iter().try_for_each(print_human),
    }
}

/// How a run ended, from the shell's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every check ran and found nothing.
    Passed,
    /// Every check ran and at least one found violations.
    Violations,
    /// At least one check could not run.
    Failed,
}

/// Parse arguments, run the selected checks and print their results.
///
/// Each check runs regardless of how the others fare. Reports of the checks
/// that ran are printed first, then every environment failure (missing
/// directories, unreadable files, bad navigation config) on stderr.
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(root = %cli.project_root.display(), "docs-check starting");

    let root = cli.project_root.as_path();
    let default_all = AllArgs::default();
    let results = match &cli.command {
        Some(Command::Markup(args)) => vec![run_markup(root, args)],
        Some(Command::Navigation(args)) => vec![run_navigation(root, args)],
        Some(Command::All(args)) => vec![
            run_markup(root, &args.markup),
            run_navigation(root, &args.navigation),
        ],
        None => vec![
            run_markup(root, &default_all.markup),
            run_navigation(root, &default_all.navigation),
        ],
    };

    let as_array = results.len() > 1;
    let mut reports = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => errors.push(e),
        }
    }

    if !reports.is_empty() {
        print_reports(&reports, cli.format, as_array)?;
    }
    for error in &errors {
        eprintln!("Error: {error:#}");
    }

    Ok(if errors.is_empty() {
        if reports.iter().all(|r| r.ok) {
            Outcome::Passed
        } else {
            Outcome::Violations
        }
    } else {
        Outcome::Failed
    })
}
