use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use xcode_patch::config::Config;
use xcode_patch::patcher::{PatchOutcome, Patcher};

#[derive(Parser)]
#[command(name = "xcode-patch")]
#[command(about = "Add the KakaoMap bridge sources to an Xcode project", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the project.pbxproj to patch
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// TOML file overriding the files, anchors or project path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] Failed to patch project: {err}");
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_project_override(cli.project);

    let patcher = Patcher::new(config);
    let outcome = patcher
        .run()
        .with_context(|| format!("while patching {}", patcher.config().project.display()))?;

    // A missing project file is reported but still exits successfully
    match outcome {
        PatchOutcome::ProjectNotFound(path) => {
            println!("[ERROR] Project file not found: {}", path.display());
        }
        PatchOutcome::Patched {
            already_present,
            added,
        } => {
            for name in &already_present {
                println!("⚠ {name} is already part of the project");
            }
            println!("[OK] Added files to the Xcode project:");
            for name in &added {
                println!("   - {name}");
            }
            println!("\nNow try building: npx expo run:ios");
        }
    }

    Ok(())
}
