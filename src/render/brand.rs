//! Brand profiles: `<branding_dir>/<name>/brand.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_BRAND: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Display name drawn as the first heading.
    #[serde(default)]
    pub nome: String,
    /// Logo file. Resolved to an absolute path inside the brand directory on load.
    pub logo: String,
    /// Primary colour, `#RRGGBB`.
    #[serde(default = "default_color")]
    pub colore: String,
    /// One of the standard PDF Type1 fonts.
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_title_size")]
    pub dimensione_titolo: f32,
    #[serde(default = "default_body_size")]
    pub dimensione_testo: f32,
    #[serde(default)]
    pub intestazione: Option<String>,
    #[serde(default)]
    pub piede: Option<String>,
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_font() -> String {
    "Helvetica".to_string()
}

fn default_title_size() -> f32 {
    16.0
}

fn default_body_size() -> f32 {
    12.0
}

impl BrandProfile {
    /// Primary colour as RGB components in `0.0..=1.0`.
    pub fn rgb(&self) -> Option<(f32, f32, f32)> {
        parse_hex_color(&self.colore)
    }
}

fn parse_hex_color(s: &str) -> Option<(f32, f32, f32)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn brand_error(name: &str, reason: impl Into<String>) -> Error {
    Error::Brand {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Load and validate the brand descriptor for `name`.
pub fn load_brand(branding_dir: &Path, name: &str) -> Result<BrandProfile> {
    // brand names are single directory components
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(brand_error(name, "invalid brand name"));
    }

    let brand_dir = branding_dir.join(name);
    let descriptor = brand_dir.join("brand.json");
    if !descriptor.is_file() {
        return Err(brand_error(
            name,
            format!("not found ({})", descriptor.display()),
        ));
    }

    let raw = fs::read_to_string(&descriptor).map_err(|e| Error::io(&descriptor, e))?;
    let mut brand: BrandProfile = serde_json::from_str(&raw)
        .map_err(|e| brand_error(name, format!("invalid descriptor: {e}")))?;

    if brand.rgb().is_none() {
        return Err(brand_error(
            name,
            format!("colour '{}' is not #RRGGBB", brand.colore),
        ));
    }

    let logo_name = Path::new(&brand.logo)
        .file_name()
        .ok_or_else(|| brand_error(name, "logo has no file name"))?;
    let logo_path = brand_dir.join(logo_name);
    if !logo_path.exists() {
        log::warn!("brand '{name}': logo {} is missing", logo_path.display());
    }
    brand.logo = absolute(logo_path).display().to_string();

    log::debug!("loaded brand '{name}' from {}", descriptor.display());
    Ok(brand)
}

fn absolute(path: PathBuf) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(&path) {
        return canonical;
    }
    if path.is_absolute() {
        return path;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&path))
        .unwrap_or(path)
}
