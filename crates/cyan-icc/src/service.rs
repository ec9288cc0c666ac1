//! Profile service
//!
//! The entry point a UI talks to: metadata from files or buffers, default
//! and built-in profiles per color space, installed profile discovery and
//! metadata editing. Every call is a pure read or one atomic file write.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::defaults::{BuiltinProfile, DefaultProfileSet};
use crate::error::{Error, Result};
use crate::icc::{IccProfile, TagSignature, rewrite_text_tags};
use crate::profile::ProfileMetadata;
use crate::search::{InstalledProfile, SearchPaths, scan_profiles};
use crate::types::{ColorSpaceKind, ProfileBlob};

/// Inspects and edits ICC profiles
///
/// Holds only immutable configuration, so it can be shared across threads
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ProfileService {
    defaults: Cow<'static, DefaultProfileSet>,
    search_paths: SearchPaths,
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileService {
    /// Built-in default profiles and the system profile directories
    pub fn new() -> Self {
        Self {
            defaults: Cow::Borrowed(DefaultProfileSet::builtin()),
            search_paths: SearchPaths::system(),
        }
    }

    /// Replace the default profile set
    pub fn with_defaults(mut self, defaults: DefaultProfileSet) -> Self {
        self.defaults = Cow::Owned(defaults);
        self
    }

    /// Replace the directories searched by [`installed_profiles`](Self::installed_profiles)
    pub fn with_search_paths(mut self, search_paths: SearchPaths) -> Self {
        self.search_paths = search_paths;
        self
    }

    pub fn defaults(&self) -> &DefaultProfileSet {
        &self.defaults
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// The first built-in profile of a color space family
    pub fn default_profile(&self, kind: ColorSpaceKind) -> Result<ProfileBlob> {
        self.defaults
            .default_for(kind)
            .cloned()
            .ok_or(Error::UnsupportedColorSpace(kind))
    }

    /// Built-in profiles of a family in their fixed order; empty for `None`
    pub fn list_builtin_profiles(&self, kind: ColorSpaceKind) -> &[BuiltinProfile] {
        self.defaults.profiles(kind)
    }

    /// Profiles of a family found in the search paths
    pub fn installed_profiles(&self, kind: ColorSpaceKind) -> Vec<InstalledProfile> {
        scan_profiles(&self.search_paths, kind)
    }

    pub fn description_from_file(&self, path: impl AsRef<Path>) -> Result<String> {
        self.description_from_data(&read_profile_file(path.as_ref())?)
    }

    /// Localized `desc` text; empty when the tag is missing
    pub fn description_from_data(&self, data: &[u8]) -> Result<String> {
        Ok(IccProfile::parse(data)?.description())
    }

    pub fn manufacturer_from_file(&self, path: impl AsRef<Path>) -> Result<String> {
        self.manufacturer_from_data(&read_profile_file(path.as_ref())?)
    }

    /// Localized `dmnd` text; empty when the tag is missing
    pub fn manufacturer_from_data(&self, data: &[u8]) -> Result<String> {
        Ok(IccProfile::parse(data)?.manufacturer())
    }

    pub fn copyright_from_file(&self, path: impl AsRef<Path>) -> Result<String> {
        self.copyright_from_data(&read_profile_file(path.as_ref())?)
    }

    /// Localized `cprt` text; empty when the tag is missing
    pub fn copyright_from_data(&self, data: &[u8]) -> Result<String> {
        Ok(IccProfile::parse(data)?.copyright())
    }

    pub fn color_space_from_file(&self, path: impl AsRef<Path>) -> Result<ColorSpaceKind> {
        self.color_space_from_data(&read_profile_file(path.as_ref())?)
    }

    /// Color space family from the header; `None` for anything that is not
    /// RGB, CMYK or gray
    pub fn color_space_from_data(&self, data: &[u8]) -> Result<ColorSpaceKind> {
        Ok(IccProfile::parse(data)?.color_space().into())
    }

    pub fn metadata_from_file(&self, path: impl AsRef<Path>) -> Result<ProfileMetadata> {
        self.metadata_from_data(&read_profile_file(path.as_ref())?)
    }

    pub fn metadata_from_data(&self, data: &[u8]) -> Result<ProfileMetadata> {
        ProfileMetadata::from_bytes(data)
    }

    /// Write a copy of `input` with new description and copyright to `output`
    ///
    /// Every other tag keeps its bytes. The result is written to a temporary
    /// file next to `output` and renamed over it, so on failure `output`
    /// (which may be `input` itself) is left as it was.
    pub fn edit_profile(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        description: &str,
        copyright: &str,
    ) -> Result<()> {
        let data = read_profile_file(input.as_ref())?;
        let edited = rewrite_text_tags(
            &data,
            &[
                (TagSignature::DESC, description),
                (TagSignature::COPYRIGHT, copyright),
            ],
        )?;
        persist_atomically(output.as_ref(), |file| file.write_all(&edited))
    }
}

fn read_profile_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::file_not_found(path, e))
}

/// Fill a temporary file in `path`'s directory and rename it over `path`
///
/// An existing `path` is resolved first, so a symlink keeps pointing at the
/// rewritten file instead of being replaced.
fn persist_atomically(
    path: &Path,
    write: impl FnOnce(&mut NamedTempFile) -> io::Result<()>,
) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::write(path, e))?;
    if let Ok(existing) = fs::metadata(&target) {
        // keep the mode of a file being replaced; best effort
        let _ = file.as_file().set_permissions(existing.permissions());
    }

    write(&mut file)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| Error::write(path, e))?;
    file.persist(&target).map_err(|e| Error::write(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icc::IccError;

    fn service() -> ProfileService {
        ProfileService::new().with_search_paths(SearchPaths::new())
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProfileService>();
        assert_send_sync::<DefaultProfileSet>();
    }

    #[test]
    fn test_default_profiles() {
        let service = service();
        for kind in [ColorSpaceKind::Rgb, ColorSpaceKind::Cmyk, ColorSpaceKind::Gray] {
            let blob = service.default_profile(kind).unwrap();
            assert_eq!(service.color_space_from_data(&blob).unwrap(), kind);
        }
        assert!(matches!(
            service.default_profile(ColorSpaceKind::None),
            Err(Error::UnsupportedColorSpace(ColorSpaceKind::None))
        ));
    }

    #[test]
    fn test_injected_empty_set() {
        let service = service().with_defaults(DefaultProfileSet::new());
        assert!(service.list_builtin_profiles(ColorSpaceKind::Rgb).is_empty());
        assert!(matches!(
            service.default_profile(ColorSpaceKind::Rgb),
            Err(Error::UnsupportedColorSpace(ColorSpaceKind::Rgb))
        ));
    }

    #[test]
    fn test_builtin_list_is_stable() {
        let service = service();
        let first = service.list_builtin_profiles(ColorSpaceKind::Gray).to_vec();
        assert_eq!(service.list_builtin_profiles(ColorSpaceKind::Gray), &first[..]);
        assert_eq!(first[0].name, "Gray Gamma 2.2");
        assert!(service.list_builtin_profiles(ColorSpaceKind::None).is_empty());
    }

    #[test]
    fn test_metadata_from_data() {
        let service = service();
        let blob = service.default_profile(ColorSpaceKind::Rgb).unwrap();
        assert_eq!(service.description_from_data(&blob).unwrap(), "sRGB");
        assert_eq!(service.manufacturer_from_data(&blob).unwrap(), "Cyan");
        assert_eq!(service.copyright_from_data(&blob).unwrap(), "Public Domain");
        assert_eq!(service.metadata_from_data(&blob).unwrap().model, "sRGB");
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let service = service();
        assert!(matches!(
            service.description_from_data(b"hello"),
            Err(Error::Parse(IccError::TooSmall { .. }))
        ));
        assert!(matches!(
            service.color_space_from_data(&[0u8; 200]),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.icc");
        let service = service();
        assert!(matches!(
            service.description_from_file(&path),
            Err(Error::FileNotFound { .. })
        ));
        assert!(matches!(
            service.edit_profile(&path, dir.path().join("out.icc"), "d", "c"),
            Err(Error::FileNotFound { .. })
        ));
        assert!(!dir.path().join("out.icc").exists());
    }

    #[test]
    fn test_empty_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.icc");
        fs::write(&path, b"").unwrap();
        assert!(matches!(
            service().color_space_from_file(&path),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_edit_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.icc");
        let output = dir.path().join("out.icc");
        let service = service();
        let blob = service.default_profile(ColorSpaceKind::Cmyk).unwrap();
        fs::write(&input, &*blob).unwrap();

        service.edit_profile(&input, &output, "Proof", "(c) Someone").unwrap();

        assert_eq!(service.description_from_file(&output).unwrap(), "Proof");
        assert_eq!(service.copyright_from_file(&output).unwrap(), "(c) Someone");
        assert_eq!(service.manufacturer_from_file(&output).unwrap(), "Cyan");
        assert_eq!(
            service.color_space_from_file(&output).unwrap(),
            ColorSpaceKind::Cmyk
        );
        // input untouched
        assert_eq!(fs::read(&input).unwrap(), &*blob);
        // no temporary files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_edit_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.icc");
        let service = service();
        fs::write(&path, &*service.default_profile(ColorSpaceKind::Gray).unwrap()).unwrap();

        service.edit_profile(&path, &path, "Renamed", "").unwrap();
        assert_eq!(service.description_from_file(&path).unwrap(), "Renamed");
        assert_eq!(service.copyright_from_file(&path).unwrap(), "");
    }

    #[test]
    fn test_edit_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.icc");
        let service = service();
        fs::write(&input, &*service.default_profile(ColorSpaceKind::Rgb).unwrap()).unwrap();

        let a = dir.path().join("a.icc");
        let b = dir.path().join("b.icc");
        service.edit_profile(&input, &a, "Same", "Same").unwrap();
        service.edit_profile(&input, &b, "Same", "Same").unwrap();
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    #[test]
    fn test_failed_write_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.icc");
        let original = service().default_profile(ColorSpaceKind::Rgb).unwrap();
        fs::write(&path, &*original).unwrap();

        let result = persist_atomically(&path, |file| {
            file.write_all(&original[..64])?;
            Err(io::Error::other("disk full"))
        });

        assert!(matches!(result, Err(Error::Write { .. })));
        assert_eq!(fs::read(&path).unwrap(), &*original);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_through_symlink_rewrites_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.icc");
        let link = dir.path().join("link.icc");
        let service = service();
        fs::write(&target, &*service.default_profile(ColorSpaceKind::Rgb).unwrap()).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        service.edit_profile(&link, &link, "Linked", "").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(service.description_from_file(&target).unwrap(), "Linked");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.icc");
        let service = service();
        fs::write(&input, &*service.default_profile(ColorSpaceKind::Gray).unwrap()).unwrap();

        let output = dir.path().join("no/such/dir/out.icc");
        assert!(matches!(
            service.edit_profile(&input, &output, "d", "c"),
            Err(Error::Write { .. })
        ));
    }
}
