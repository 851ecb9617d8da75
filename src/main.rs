//! CLI entry point for inklude

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use inklude::{Inklude, LoadConfig, OutputConfig, TreeFormatter, print_json, print_value};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "inklude")]
#[command(about = "Load a directory of JSON modules into a tree, or merge them into one config")]
#[command(version)]
struct Args {
    /// Directory to load
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Regex a file name must match; its first capture group is the module name
    #[arg(short = 'f', long = "filter", value_name = "REGEX")]
    filter: Option<String>,

    /// Glob a file name must match; the file stem is the module name
    #[arg(short = 'g', long = "filter-glob", value_name = "GLOB", conflicts_with = "filter")]
    filter_glob: Option<String>,

    /// Regex for file or directory names to skip (default: ^\.(git|svn)$)
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    exclude: Option<String>,

    /// Skip names matching glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Treat a directory that cannot be read as empty instead of failing
    #[arg(short = 'o', long = "optional")]
    optional: bool,

    /// Deep-merge all top-level modules into one object and print it as JSON
    #[arg(short = 'a', long = "aggregate")]
    aggregate: bool,

    /// JSON file to merge the aggregated result into (requires --aggregate)
    #[arg(long = "base", value_name = "FILE", requires = "aggregate")]
    base: Option<PathBuf>,

    /// Output the module tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Hide value summaries in tree output
    #[arg(long = "no-values")]
    no_values: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Number of parallel workers
    /// (0 = auto-detect, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,
}

fn build_config(args: &Args) -> inklude::Result<LoadConfig> {
    let mut config = LoadConfig::new(&args.path)
        .with_optional(args.optional)
        .with_jobs(args.jobs);
    if let Some(ref filter) = args.filter {
        config = config.with_filter(filter)?;
    }
    if let Some(ref glob) = args.filter_glob {
        config = config.with_filter_glob(glob)?;
    }
    if let Some(ref exclude) = args.exclude {
        config = config.with_exclude(exclude)?;
    }
    for pattern in &args.ignore {
        config = config.with_ignore(pattern)?;
    }
    Ok(config)
}

fn read_base(path: &Path) -> Result<Value, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("invalid JSON in '{}': {}", path.display(), e))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = build_config(&args).unwrap_or_else(|e| {
        eprintln!("inklude: {}", e);
        process::exit(1);
    });

    let inklude = Inklude::json();

    let result = if args.aggregate {
        let mut base = args.base.as_ref().map(|path| {
            read_base(path).unwrap_or_else(|e| {
                eprintln!("inklude: {}", e);
                process::exit(1);
            })
        });

        let merged = inklude.aggregate(&config, base.as_mut()).unwrap_or_else(|e| {
            eprintln!("inklude: {}", e);
            process::exit(1);
        });

        // With a base file, print the base after merging
        match base {
            Some(base) => print_value(&base),
            None => print_value(&Value::Object(merged)),
        }
    } else {
        let tree = inklude.load(&config).unwrap_or_else(|e| {
            eprintln!("inklude: {}", e);
            process::exit(1);
        });

        if args.json {
            print_json(&tree)
        } else {
            let formatter = TreeFormatter::new(OutputConfig {
                use_color: should_use_color(args.color),
                show_values: !args.no_values,
                ..Default::default()
            });
            formatter.print(&args.path.display().to_string(), &tree)
        }
    };

    if let Err(e) = result {
        eprintln!("inklude: error writing output: {}", e);
        process::exit(1);
    }
}
