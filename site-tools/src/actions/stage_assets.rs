// Stage Vendor Assets
// Copies the Material Tailwind ripple script out of node_modules into the
// directory the site serves static files from.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

/// Vendor script location, relative to the workspace root.
pub const VENDOR_SCRIPT: &str = "node_modules/@material-tailwind/html/scripts/ripple.js";
/// Served copy, relative to the workspace root.
pub const STAGED_SCRIPT: &str = "web/public/js/material-tailwind.js";

#[derive(Debug, Error)]
#[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
pub struct StageError {
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCopy {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl AssetCopy {
    pub fn material_tailwind(root: &Path) -> Self {
        Self {
            source: root.join(VENDOR_SCRIPT),
            dest: root.join(STAGED_SCRIPT),
        }
    }

    fn error(&self, source: io::Error) -> StageError {
        StageError {
            from: self.source.clone(),
            to: self.dest.clone(),
            source,
        }
    }
}

/// Copies `asset.source` over `asset.dest`, creating parent directories.
/// Returns the number of bytes written.
///
/// The source is checked before anything is touched, so a missing vendor
/// file never creates or truncates the destination.
pub async fn stage(asset: &AssetCopy) -> Result<u64, StageError> {
    let metadata = fs::metadata(&asset.source)
        .await
        .map_err(|e| asset.error(e))?;
    if !metadata.is_file() {
        return Err(asset.error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source is not a regular file",
        )));
    }

    if let Some(dir) = asset.dest.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).await.map_err(|e| asset.error(e))?;
        }
    }

    let bytes = fs::copy(&asset.source, &asset.dest)
        .await
        .map_err(|e| asset.error(e))?;

    tracing::info!(
        source = %asset.source.display(),
        dest = %asset.dest.display(),
        bytes,
        "Material Tailwind JS copied"
    );
    Ok(bytes)
}
