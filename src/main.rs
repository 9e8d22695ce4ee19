use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use next_version::analyzer::ClassifierPreset;
use next_version::config::{self, Config};
use next_version::git::Git2Repository;
use next_version::{compute_or_default, output, ui, NextVersion};

#[derive(clap::Parser)]
#[command(
    name = "next-version",
    about = "Compute the next semantic version from git tags and commit messages"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(long, value_enum, help = "Commit message matching policy")]
    preset: Option<ClassifierPreset>,

    #[arg(long, help = "Ignore date-like tags such as 2024.01.01")]
    exclude_year_tags: bool,

    #[arg(long, help = "Also write a key=value pipeline annotation")]
    annotate: bool,

    #[arg(long, help = "File the annotation is appended to (default: stdout)")]
    annotation_file: Option<PathBuf>,

    #[arg(long, help = "Upper-case the annotation value")]
    uppercase: bool,

    #[arg(long, help = "Print debug diagnostics to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    /// Command-line flags take precedence over the configuration file
    fn apply(&self, config: &mut Config) {
        if let Some(preset) = self.preset {
            config.classifier.preset = preset;
        }
        if self.exclude_year_tags {
            config.tags.exclude_year_prefixed = true;
        }
        if self.annotate || self.annotation_file.is_some() {
            config.output.annotation = true;
        }
        if let Some(path) = &self.annotation_file {
            config.output.annotation_file = Some(path.clone());
        }
        if self.uppercase {
            config.output.uppercase = true;
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second subscriber can only be installed in tests; ignore that case.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("next-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    // A broken config file must not block the pipeline
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("{}; using default configuration", e));
            Config::default()
        }
    };
    args.apply(&mut config);

    let next = match Git2Repository::open(&args.repo) {
        Ok(repo) => compute_or_default(&repo, &config),
        Err(e) => {
            tracing::warn!(error = %e, "cannot open repository");
            NextVersion::fallback(e)
        }
    };

    ui::display_outcome(&next);

    let mut sinks = output::sinks_from_config(&config.output);
    for err in output::emit_all(&mut sinks, &next.version) {
        ui::display_error(&err.to_string());
    }

    Ok(())
}
