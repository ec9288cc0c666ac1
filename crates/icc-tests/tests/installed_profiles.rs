//! Installed profile discovery tests
//!
//! Builds a directory tree of profiles and non-profiles and checks what
//! `installed_profiles` keeps, and in which order.

use std::path::Path;

use cyan_icc::{ColorSpaceKind, DefaultProfileSet, ProfileService, SearchPaths, scan_profiles};
use icc_tests::{garbage, write_fixture};

fn populate(root: &Path) {
    let set = DefaultProfileSet::builtin();
    let rgb = set.profiles(ColorSpaceKind::Rgb);
    let gray = set.profiles(ColorSpaceKind::Gray);
    let cmyk = set.profiles(ColorSpaceKind::Cmyk);

    write_fixture(root, "display/srgb.icc", &rgb[0].blob).unwrap();
    write_fixture(root, "display/nested/deeper/p3.ICM", &rgb[2].blob).unwrap();
    write_fixture(root, "adobe.icm", &rgb[1].blob).unwrap();
    write_fixture(root, "gray.icc", &gray[0].blob).unwrap();
    write_fixture(root, "print/cmyk.icc", &cmyk[0].blob).unwrap();

    // not profiles, or not usable
    write_fixture(root, "readme.txt", b"not a profile").unwrap();
    write_fixture(root, "srgb-copy.icc.bak", &rgb[0].blob).unwrap();
    write_fixture(root, "broken.icc", &garbage(9, 700)).unwrap();
    write_fixture(root, "empty.icc", &[]).unwrap();
}

fn without_description(root: &Path) {
    use cyan_icc::icc::{IccProfile, ProfileWriter, TagSignature};

    let blob = &DefaultProfileSet::builtin().profiles(ColorSpaceKind::Rgb)[3].blob;
    let profile = IccProfile::parse(blob).unwrap();
    let mut writer = ProfileWriter::new(&profile.header);
    for entry in profile.entries() {
        if entry.signature != TagSignature::DESC {
            writer.push(entry.signature, profile.entry_data(entry).to_vec());
        }
    }
    write_fixture(root, "nameless.icc", &writer.finish().unwrap()).unwrap();
}

#[test]
fn test_scan_filters_by_kind_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());
    without_description(dir.path());

    let paths = SearchPaths::new().with_dir(dir.path());
    let rgb = scan_profiles(&paths, ColorSpaceKind::Rgb);

    let descriptions: Vec<_> = rgb.iter().map(|p| p.description.as_str()).collect();
    assert_eq!(descriptions, ["Adobe RGB (1998)", "Display P3", "sRGB"]);
    assert!(rgb[1].path.ends_with("display/nested/deeper/p3.ICM"));

    let gray = scan_profiles(&paths, ColorSpaceKind::Gray);
    assert_eq!(gray.len(), 1);
    assert_eq!(gray[0].description, "Gray Gamma 2.2");

    let cmyk = scan_profiles(&paths, ColorSpaceKind::Cmyk);
    assert_eq!(cmyk.len(), 1);

    assert!(scan_profiles(&paths, ColorSpaceKind::None).is_empty());
}

#[test]
fn test_overlapping_dirs_dedup() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let paths = SearchPaths::new()
        .with_dir(dir.path())
        .with_dir(dir.path().join("display"))
        .with_dir(dir.path().join("missing"));
    let rgb = scan_profiles(&paths, ColorSpaceKind::Rgb);
    assert_eq!(rgb.len(), 3);
}

#[test]
fn test_service_uses_configured_paths() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let service = ProfileService::new().with_search_paths(SearchPaths::new().with_dir(dir.path()));
    let first = service.installed_profiles(ColorSpaceKind::Rgb);
    let second = service.installed_profiles(ColorSpaceKind::Rgb);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    for profile in &first {
        assert_eq!(
            service.description_from_file(&profile.path).unwrap(),
            profile.description
        );
    }
}
