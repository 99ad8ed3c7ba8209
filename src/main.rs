// Copyright 2025 Bilinear Labs - MIT License

//! Airdrop Merkle generator CLI.

mod cli;

use airdrop_merkle::output::write_artifact;
use airdrop_merkle::{GeneratorOptions, Phase};
use clap::Parser as _;
use cli::{Cli, Commands};
use eyre::Context as _;
use std::path::{Path, PathBuf};
use tracing::info;

fn init_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))
}

/// One phase, start to finish. Nothing is written unless every step succeeds.
fn run_phase(
    phase: Phase,
    input: &Path,
    output: &Path,
    options: &GeneratorOptions,
) -> eyre::Result<()> {
    let distribution = phase
        .generate_from_path(input, options)
        .wrap_err_with(|| format!("Failed to generate {phase} from {}", input.display()))?;
    write_artifact(output, &distribution)
        .wrap_err_with(|| format!("Failed to write {phase} artifact {}", output.display()))?;

    info!(
        %phase,
        output = %output.display(),
        root = %distribution.merkle_root,
        "has been written"
    );
    Ok(())
}

async fn run_all(
    input_dir: PathBuf,
    output_dir: PathBuf,
    options: GeneratorOptions,
) -> eyre::Result<()> {
    let jobs = Phase::ALL.into_iter().map(|phase| {
        let input = input_dir.join(phase.default_input());
        let output = output_dir.join(phase.default_output());
        tokio::task::spawn_blocking(move || run_phase(phase, &input, &output, &options))
    });

    futures::future::try_join_all(jobs)
        .await
        .wrap_err("Phase task panicked")?
        .into_iter()
        .collect::<eyre::Result<Vec<()>>>()?;
    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let options = GeneratorOptions::from(&args.options);
            let input = args
                .input
                .unwrap_or_else(|| PathBuf::from(args.phase.default_input()));
            let output = args
                .output
                .unwrap_or_else(|| Path::new("output").join(args.phase.default_output()));
            run_phase(args.phase, &input, &output, &options)
        }
        Commands::All { args } => {
            let options = GeneratorOptions::from(&args.options);
            run_all(args.input_dir, args.output_dir, options).await
        }
    }
}
