//! Serde support tests (`serde` feature)
//!
//! Metadata and search paths persist as JSON for UI preferences.

use cyan_icc::{ColorSpaceKind, ProfileMetadata, ProfileService, SearchPaths};

#[test]
fn test_metadata_json() {
    let service = ProfileService::new();
    let blob = service.default_profile(ColorSpaceKind::Gray).unwrap();
    let meta = service.metadata_from_data(&blob).unwrap();

    let json = serde_json::to_string(&meta).unwrap();
    assert!(json.contains("\"description\":\"Gray Gamma 2.2\""));
    assert!(json.contains("\"color_space\":\"Gray\""));

    let back: ProfileMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back, meta);
}

#[test]
fn test_search_paths_json() {
    let paths = SearchPaths::new().with_dir("/opt/profiles").with_dir("/srv/icc");
    let json = serde_json::to_value(&paths).unwrap();
    assert_eq!(json["dirs"][1], "/srv/icc");

    let back: SearchPaths = serde_json::from_value(json).unwrap();
    assert_eq!(back, paths);
}

#[test]
fn test_color_space_kind_json() {
    for kind in ColorSpaceKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(serde_json::from_str::<ColorSpaceKind>(&json).unwrap(), kind);
    }
}
