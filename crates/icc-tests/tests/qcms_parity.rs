//! Parity tests against qcms
//!
//! qcms only handles RGB display profiles, so only the RGB built-ins are
//! checked, before and after editing.

use cyan_icc::{ColorSpaceKind, ProfileService};
use icc_tests::builtin_fixtures;
use icc_tests::reference::qcms_accepts;

#[test]
fn test_rgb_builtins_accepted() {
    let rgb: Vec<_> = builtin_fixtures()
        .into_iter()
        .filter(|f| f.kind == ColorSpaceKind::Rgb)
        .collect();
    assert_eq!(rgb.len(), 4);

    for fixture in rgb {
        assert!(qcms_accepts(&fixture.data), "{}: qcms rejected profile", fixture.name);
    }
}

#[test]
fn test_edited_rgb_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let service = ProfileService::new();

    for (i, profile) in service
        .list_builtin_profiles(ColorSpaceKind::Rgb)
        .iter()
        .enumerate()
    {
        let input = icc_tests::write_fixture(dir.path(), &format!("{i}.icc"), &profile.blob)
            .unwrap();
        let output = dir.path().join(format!("{i}-edited.icc"));
        service
            .edit_profile(&input, &output, "A much longer description than before", "")
            .unwrap();

        let data = std::fs::read(&output).unwrap();
        assert!(qcms_accepts(&data), "{}: qcms rejected edit", profile.name);
    }
}

#[test]
fn test_qcms_rejects_what_we_reject() {
    let service = ProfileService::new();
    for len in [0usize, 64, 131] {
        let data = icc_tests::garbage(7, len);
        assert!(service.color_space_from_data(&data).is_err());
        assert!(!qcms_accepts(&data), "len {len}");
    }
}
