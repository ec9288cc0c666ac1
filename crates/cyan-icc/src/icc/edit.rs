//! Text tag rewriting
//!
//! Replaces text tags of an existing profile while carrying every other tag
//! element over byte-for-byte. The tag table order is kept; replaced tags
//! that were absent are appended.

use super::error::IccError;
use super::header::{HEADER_SIZE, ProfileVersion};
use super::parser::IccProfile;
use super::tags::TextData;
use super::types::TagSignature;
use super::writer::ProfileWriter;

/// Encode `text` for `sig` the way a profile of `version` expects it.
///
/// v4 profiles use `mluc` for every text tag. v2 profiles use
/// textDescriptionType for the description-like tags and `text` otherwise.
pub fn encode_text_tag(sig: TagSignature, text: &str, version: ProfileVersion) -> Vec<u8> {
    if version.uses_mluc() {
        return TextData::encode_mluc(text);
    }
    match sig {
        TagSignature::DESC | TagSignature::DMND | TagSignature::DMDD => TextData::encode_desc(text),
        _ => TextData::encode_text(text),
    }
}

/// Rewrite `data` with the given text tags replaced or added
pub fn rewrite_text_tags(
    data: &[u8],
    replacements: &[(TagSignature, &str)],
) -> Result<Vec<u8>, IccError> {
    let profile = IccProfile::parse(data)?;

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&profile.as_bytes()[..HEADER_SIZE]);

    let mut writer = ProfileWriter::from_raw_header(header);
    for entry in profile.entries() {
        writer.push(entry.signature, profile.entry_data(entry).to_vec());
    }
    for &(sig, text) in replacements {
        writer.push(sig, encode_text_tag(sig, text, profile.header.version));
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icc::header::{ColorSpace, IccHeader, ProfileClass, RenderingIntent};
    use crate::icc::tags::CurveData;
    use crate::icc::types::{DateTimeNumber, XyzNumber};

    fn gray_profile(version: ProfileVersion) -> Vec<u8> {
        let header = IccHeader {
            size: 0,
            cmm_type: u32::from_be_bytes(*b"lcms"),
            version,
            device_class: ProfileClass::Display,
            color_space: ColorSpace::Gray,
            pcs: ColorSpace::Xyz,
            creation_date: DateTimeNumber {
                year: 2017,
                month: 3,
                day: 9,
                ..Default::default()
            },
            platform: u32::from_be_bytes(*b"APPL"),
            flags: 0,
            manufacturer: 0,
            model: 0,
            attributes: 0,
            rendering_intent: RenderingIntent::RelativeColorimetric,
            illuminant: XyzNumber::D50,
            creator: 0,
            profile_id: [7; 16],
        };
        let mut writer = ProfileWriter::new(&header);
        writer
            .push(TagSignature::DESC, encode_text_tag(TagSignature::DESC, "Old", version))
            .push(TagSignature::GRAY_TRC, CurveData::gamma(2.2).encode())
            .push(TagSignature::DMND, encode_text_tag(TagSignature::DMND, "Acme", version));
        writer.finish().unwrap()
    }

    #[test]
    fn test_encoding_follows_version() {
        let v2 = ProfileVersion::V2_1;
        let v4 = ProfileVersion::V4_3;
        assert_eq!(&encode_text_tag(TagSignature::DESC, "a", v2)[0..4], b"desc");
        assert_eq!(&encode_text_tag(TagSignature::COPYRIGHT, "a", v2)[0..4], b"text");
        assert_eq!(&encode_text_tag(TagSignature::DESC, "a", v4)[0..4], b"mluc");
        assert_eq!(&encode_text_tag(TagSignature::COPYRIGHT, "a", v4)[0..4], b"mluc");
    }

    #[test]
    fn test_rewrite_keeps_other_tags() {
        for version in [ProfileVersion::V2_1, ProfileVersion::V4_3] {
            let original = gray_profile(version);
            let rewritten = rewrite_text_tags(
                &original,
                &[(TagSignature::DESC, "New"), (TagSignature::COPYRIGHT, "Mine")],
            )
            .unwrap();

            let before = IccProfile::parse(&original).unwrap();
            let after = IccProfile::parse(&rewritten).unwrap();

            assert_eq!(after.description(), "New");
            assert_eq!(after.copyright(), "Mine");
            assert_eq!(after.manufacturer(), "Acme");
            assert_eq!(
                after.tag_data(TagSignature::GRAY_TRC),
                before.tag_data(TagSignature::GRAY_TRC)
            );

            // table order kept, copyright appended
            let order: Vec<_> = after.entries().iter().map(|e| e.signature).collect();
            assert_eq!(
                order,
                vec![
                    TagSignature::DESC,
                    TagSignature::GRAY_TRC,
                    TagSignature::DMND,
                    TagSignature::COPYRIGHT
                ]
            );
        }
    }

    #[test]
    fn test_rewrite_preserves_header_except_size_and_id() {
        let original = gray_profile(ProfileVersion::V2_1);
        let mut with_id = original.clone();
        with_id[84..100].fill(0x5A);

        let rewritten = rewrite_text_tags(&with_id, &[(TagSignature::DESC, "Renamed")]).unwrap();
        assert_eq!(&rewritten[4..84], &with_id[4..84]);
        assert_eq!(&rewritten[84..100], &[0u8; 16]);
        assert_eq!(&rewritten[100..128], &with_id[100..128]);
        assert_eq!(
            u32::from_be_bytes([rewritten[0], rewritten[1], rewritten[2], rewritten[3]]) as usize,
            rewritten.len()
        );
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        let original = gray_profile(ProfileVersion::V4_3);
        let edits = [(TagSignature::DESC, "D"), (TagSignature::COPYRIGHT, "C")];
        assert_eq!(
            rewrite_text_tags(&original, &edits).unwrap(),
            rewrite_text_tags(&original, &edits).unwrap()
        );
    }

    #[test]
    fn test_rewrite_rejects_garbage() {
        assert!(rewrite_text_tags(b"not a profile", &[]).is_err());
    }
}
