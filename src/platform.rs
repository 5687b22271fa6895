use std::path::PathBuf;

pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Platform config directory for the tool (~/.config/preventivi on Linux,
/// ~/Library/Application Support/preventivi on macOS).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "preventivi").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Archive location used since the first release: ~/.preventivi_cyberworks/db.json
pub fn default_archive_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".preventivi_cyberworks").join("db.json"))
}
