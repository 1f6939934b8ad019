use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shared_types::ThemeConfig;
use site_tools::actions::{export_theme, stage_assets};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-tools", about = "One-shot build steps for the Lexpage front end")]
struct Cli {
    /// Workspace root that default paths are resolved against.
    #[arg(long, env = "SITE_ROOT", default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    action: SiteAction,
}

#[derive(Subcommand)]
enum SiteAction {
    /// Copy the Material Tailwind script into the static directory.
    StageAssets {
        #[arg(long, env = "ASSET_SOURCE")]
        source: Option<PathBuf>,
        #[arg(long, env = "ASSET_DEST")]
        dest: Option<PathBuf>,
    },
    /// Write the Tailwind theme as JSON.
    ExportTheme {
        #[arg(long, env = "THEME_OUTPUT")]
        output: Option<PathBuf>,
    },
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.action {
        SiteAction::StageAssets { source, dest } => {
            let defaults = stage_assets::AssetCopy::material_tailwind(&cli.root);
            let asset = stage_assets::AssetCopy {
                source: source.unwrap_or(defaults.source),
                dest: dest.unwrap_or(defaults.dest),
            };
            stage_assets::stage(&asset)
                .await
                .context("Failed to copy Material Tailwind JS")?;
        }
        SiteAction::ExportTheme { output } => {
            let output = output.unwrap_or_else(|| cli.root.join(export_theme::THEME_FILE));
            export_theme::export(&ThemeConfig::lexpage(), &output).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Try the parent directory first (when run from a member crate),
    // then fall back to the current directory
    dotenvy::from_filename("../.env")
        .or_else(|_| dotenvy::dotenv())
        .ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_tools=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
