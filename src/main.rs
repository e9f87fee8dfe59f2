use anyhow::Context;
use clap::Parser;
use fuzzyeval::cli::{Cli, Command};
use fuzzyeval::commands;
use fuzzyeval::config::ConfigManager;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let manager = ConfigManager::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = manager.get();

    match cli.command {
        Command::Membership(args) => {
            let curves = commands::execute_membership(&args, config, &cli.output)
                .with_context(|| format!("Failed to process {}", args.genes.display()))?;
            println!("\nExported {} membership curves to {}", curves.len(), cli.output.display());
        }
        Command::Analyze(args) => {
            let report = commands::execute_analyze(&args, config, &cli.output)
                .with_context(|| format!("Failed to analyze {}", args.predictions.display()))?;
            println!(
                "\nAnalyzed {} samples; artifacts saved to {}",
                report.sample_count,
                cli.output.display()
            );
        }
    }

    Ok(())
}
