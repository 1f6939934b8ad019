pub mod export_theme;
pub mod stage_assets;
