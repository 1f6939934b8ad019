//! Styling configuration handed to the Tailwind build.
//!
//! The shape mirrors `tailwind.config.js` so the exported JSON can be
//! spread straight into it: `content`, `theme.extend.{colors,fontFamily}`
//! and `plugins`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Shade keys every palette must define, lightest first.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("palette `{palette}` is missing shade {shade}")]
    MissingShade { palette: String, shade: u16 },
    #[error("palette `{palette}` has unsupported shade {shade}")]
    UnexpectedShade { palette: String, shade: u16 },
    #[error("palette `{palette}` shade {shade}: `{value}` is not a #rrggbb colour")]
    InvalidColor {
        palette: String,
        shade: u16,
        value: String,
    },
    #[error("no content paths configured")]
    NoContentPaths,
    #[error("font family `{0}` has no fonts")]
    EmptyFontStack(String),
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub BTreeMap<u16, String>);

impl Palette {
    /// Builds a palette from colours listed in [`SHADES`] order.
    pub fn from_scale(colors: [&str; 11]) -> Self {
        Self(
            SHADES
                .iter()
                .zip(colors)
                .map(|(shade, color)| (*shade, color.to_string()))
                .collect(),
        )
    }

    pub fn shade(&self, shade: u16) -> Option<&str> {
        self.0.get(&shade).map(String::as_str)
    }

    fn validate(&self, name: &str) -> Result<(), ThemeError> {
        for shade in SHADES {
            if !self.0.contains_key(&shade) {
                return Err(ThemeError::MissingShade {
                    palette: name.to_string(),
                    shade,
                });
            }
        }

        for (shade, value) in &self.0 {
            if !SHADES.contains(shade) {
                return Err(ThemeError::UnexpectedShade {
                    palette: name.to_string(),
                    shade: *shade,
                });
            }
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidColor {
                    palette: name.to_string(),
                    shade: *shade,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    pub colors: BTreeMap<String, Palette>,
    pub font_family: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSection {
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Globs the CSS build scans for utility class names.
    pub content: Vec<String>,
    pub theme: ThemeSection,
    /// Plugin package names, e.g. `@tailwindcss/forms`.
    pub plugins: Vec<String>,
}

impl ThemeConfig {
    /// The site's palette, font stack and scan paths.
    pub fn lexpage() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert(
            "primary".to_string(),
            Palette::from_scale([
                "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7",
                "#0369a1", "#075985", "#0c4a6e", "#082f49",
            ]),
        );
        colors.insert(
            "burgundy".to_string(),
            Palette::from_scale([
                "#fdf2f4", "#fce7eb", "#f9d0d9", "#f4a6b8", "#ec6d8e", "#e0426a", "#cc2251",
                "#a91741", "#8d153c", "#781537", "#42081b",
            ]),
        );

        let mut font_family = BTreeMap::new();
        font_family.insert(
            "sans".to_string(),
            vec![
                "Inter".to_string(),
                "system-ui".to_string(),
                "sans-serif".to_string(),
            ],
        );

        Self {
            content: vec![
                "./web/src/**/*.rs".to_string(),
                // Class names the accordion toggles at runtime live here.
                "./shared-types/src/**/*.rs".to_string(),
                "./web/public/**/*.html".to_string(),
                "./node_modules/@material-tailwind/html/theme/components/**/*.{js,ts,jsx,tsx}"
                    .to_string(),
            ],
            theme: ThemeSection {
                extend: ThemeExtend {
                    colors,
                    font_family,
                },
            },
            plugins: vec![
                "@tailwindcss/forms".to_string(),
                "@tailwindcss/typography".to_string(),
            ],
        }
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.theme.extend.colors.get(name)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.content.is_empty() {
            return Err(ThemeError::NoContentPaths);
        }

        for (name, palette) in &self.theme.extend.colors {
            palette.validate(name)?;
        }

        for (name, fonts) in &self.theme.extend.font_family {
            if fonts.is_empty() {
                return Err(ThemeError::EmptyFontStack(name.clone()));
            }
        }

        Ok(())
    }

    /// Validates, then renders the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}
