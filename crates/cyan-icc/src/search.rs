//! Installed profile discovery
//!
//! Walks the configured directories for `.icc`/`.icm` files and keeps the
//! readable profiles of one color space family, for populating profile
//! menus next to the built-in set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::icc::IccProfile;
use crate::types::ColorSpaceKind;

/// Directories searched for installed profiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// No directories
    pub fn new() -> Self {
        Self::default()
    }

    /// The platform's conventional ICC profile directories
    pub fn system() -> Self {
        let home = std::env::var_os("HOME").map(PathBuf::from);
        let mut paths = Self::new();

        if cfg!(target_os = "macos") {
            paths = paths
                .with_dir("/Library/ColorSync/Profiles")
                .with_dir("/System/Library/ColorSync/Profiles");
            if let Some(home) = &home {
                paths = paths.with_dir(home.join("Library/ColorSync/Profiles"));
            }
        } else if cfg!(windows) {
            let root = std::env::var_os("SystemRoot")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
            paths = paths.with_dir(root.join(r"System32\spool\drivers\color"));
        } else {
            paths = paths
                .with_dir("/usr/share/color/icc")
                .with_dir("/usr/local/share/color/icc");
            let data_home = std::env::var_os("XDG_DATA_HOME")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .or_else(|| home.as_ref().map(|h| h.join(".local/share")));
            if let Some(home) = &home {
                paths = paths.with_dir(home.join(".color/icc"));
            }
            if let Some(data_home) = data_home {
                paths = paths.with_dir(data_home.join("icc"));
            }
        }
        paths
    }

    /// Add a directory; duplicates are ignored
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

/// A profile found on disk
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstalledProfile {
    pub description: String,
    pub path: PathBuf,
}

/// Find installed profiles of one color space family
///
/// Unreadable files, invalid profiles and profiles without a description
/// are skipped, as are missing directories. Sorted by description, then
/// path. `ColorSpaceKind::None` yields nothing.
pub fn scan_profiles(paths: &SearchPaths, kind: ColorSpaceKind) -> Vec<InstalledProfile> {
    if kind == ColorSpaceKind::None {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for dir in paths.dirs() {
        collect_profile_files(dir, &mut candidates);
    }

    let mut found: Vec<InstalledProfile> = candidates
        .into_iter()
        .filter_map(|path| {
            let data = fs::read(&path).ok()?;
            let profile = IccProfile::parse(&data).ok()?;
            if ColorSpaceKind::from(profile.color_space()) != kind {
                return None;
            }
            let description = profile.description();
            (!description.is_empty()).then_some(InstalledProfile { description, path })
        })
        .collect();

    found.sort();
    found.dedup_by(|a, b| a.path == b.path);
    found
}

/// Recursively gather `.icc`/`.icm` files below `dir`
///
/// Symlinked directories are not followed, so link cycles cannot recurse.
fn collect_profile_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            collect_profile_files(&path, out);
        } else if (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
            && has_profile_extension(&path)
        {
            out.push(path);
        }
    }
}

fn has_profile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("icc") || e.eq_ignore_ascii_case("icm"))
}
