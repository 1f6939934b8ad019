// Export Theme
// Writes the site's Tailwind theme as JSON so tailwind.config.js can load it.

use std::path::Path;

use anyhow::Context;
use shared_types::ThemeConfig;
use tokio::fs;

pub const THEME_FILE: &str = "tailwind.theme.json";

pub async fn export(config: &ThemeConfig, output: &Path) -> anyhow::Result<usize> {
    let json = config.to_json_pretty().context("Invalid theme configuration")?;

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    fs::write(output, format!("{json}\n"))
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        output = %output.display(),
        palettes = config.theme.extend.colors.len(),
        "Theme exported"
    );
    Ok(json.len() + 1)
}
