//! ICC Profile Parser
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap/share data)
//!
//! Parsing validates the container (signature, declared size, tag table and
//! tag bounds) eagerly. Tag payloads are decoded on request, and a tag whose
//! payload cannot be decoded reads as absent.
//!
//! # Usage
//!
//! ```
//! # let bytes = cyan_icc::DefaultProfileSet::builtin().default_for(cyan_icc::ColorSpaceKind::Rgb).unwrap();
//! use cyan_icc::icc::IccProfile;
//!
//! let profile = IccProfile::parse(&bytes)?;
//! println!("Profile: {}", profile.description());
//! # Ok::<(), cyan_icc::icc::IccError>(())
//! ```

use super::error::IccError;
use super::header::{ColorSpace, IccHeader, MIN_PROFILE_SIZE};
use super::tags::{TagData, TextData};
use super::types::{TagSignature, read_u32};

/// Size of one tag table entry: signature, offset, size
pub(crate) const TAG_ENTRY_SIZE: usize = 12;

/// Locale used when resolving localized text, matching what profile
/// inspectors display by default
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_COUNTRY: &str = "US";

/// Tag table entry (as stored in profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    /// Tag signature
    pub signature: TagSignature,
    /// Offset from start of profile
    pub offset: u32,
    /// Size of tag data
    pub size: u32,
}

impl TagEntry {
    fn range(&self) -> std::ops::Range<usize> {
        self.offset as usize..self.offset as usize + self.size as usize
    }
}

/// An ICC profile container parsed from borrowed bytes
#[derive(Debug, Clone)]
pub struct IccProfile<'a> {
    /// Profile header (128 bytes)
    pub header: IccHeader,
    /// Tag table in stored order
    entries: Vec<TagEntry>,
    /// Profile bytes, limited to the size declared in the header
    data: &'a [u8],
}

impl<'a> IccProfile<'a> {
    /// Parse an ICC profile from bytes
    pub fn parse(data: &'a [u8]) -> Result<Self, IccError> {
        let header = IccHeader::parse(data)?;

        if data.len() < MIN_PROFILE_SIZE {
            return Err(IccError::TooSmall {
                expected: MIN_PROFILE_SIZE,
                actual: data.len(),
            });
        }
        header.validate(data.len())?;

        // Trailing bytes past the declared size are not part of the profile
        let data = &data[..header.size as usize];
        let entries = Self::parse_tag_table(data)?;

        Ok(Self {
            header,
            entries,
            data,
        })
    }

    /// Parse and bounds-check the tag table
    fn parse_tag_table(data: &[u8]) -> Result<Vec<TagEntry>, IccError> {
        let count = read_u32(data, 128).unwrap_or_default();

        let table_start = MIN_PROFILE_SIZE;
        let fits = (count as usize)
            .checked_mul(TAG_ENTRY_SIZE)
            .and_then(|len| len.checked_add(table_start))
            .is_some_and(|end| end <= data.len());
        if !fits {
            return Err(IccError::TagTableOutOfBounds {
                count,
                profile_size: data.len(),
            });
        }

        data[table_start..table_start + count as usize * TAG_ENTRY_SIZE]
            .chunks_exact(TAG_ENTRY_SIZE)
            .map(|raw| {
                let entry = TagEntry {
                    signature: TagSignature(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]])),
                    offset: u32::from_be_bytes([raw[4], raw[5], raw[6], raw[7]]),
                    size: u32::from_be_bytes([raw[8], raw[9], raw[10], raw[11]]),
                };

                let end = entry.offset as u64 + entry.size as u64;
                if end > data.len() as u64 {
                    return Err(IccError::TagOutOfBounds {
                        tag: entry.signature.0,
                        offset: entry.offset,
                        size: entry.size,
                        profile_size: data.len(),
                    });
                }
                Ok(entry)
            })
            .collect()
    }

    /// The profile bytes (up to the declared size)
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Tag table in stored order
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Data color space from the header
    pub fn color_space(&self) -> ColorSpace {
        self.header.color_space
    }

    /// Raw element bytes of the first entry with this signature
    pub fn tag_data(&self, sig: TagSignature) -> Option<&'a [u8]> {
        self.entries
            .iter()
            .find(|e| e.signature == sig)
            .map(|e| &self.data[e.range()])
    }

    /// Raw element bytes of a table entry
    pub fn entry_data(&self, entry: &TagEntry) -> &'a [u8] {
        &self.data[entry.range()]
    }

    /// Decoded tag, `None` when absent or undecodable
    pub fn tag(&self, sig: TagSignature) -> Option<TagData> {
        self.tag_data(sig).and_then(|raw| TagData::parse(raw).ok())
    }

    /// Decoded text tag, `None` when absent, undecodable or not a text type
    pub fn text(&self, sig: TagSignature) -> Option<TextData> {
        match self.tag(sig)? {
            TagData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text tag resolved for a locale; empty when the tag is missing
    pub fn localized_text(&self, sig: TagSignature, language: &str, country: &str) -> String {
        self.text(sig)
            .map(|text| text.resolve(language, country).to_owned())
            .unwrap_or_default()
    }

    /// Profile description (`desc`)
    pub fn description(&self) -> String {
        self.localized_text(TagSignature::DESC, DEFAULT_LANGUAGE, DEFAULT_COUNTRY)
    }

    /// Copyright text (`cprt`)
    pub fn copyright(&self) -> String {
        self.localized_text(TagSignature::COPYRIGHT, DEFAULT_LANGUAGE, DEFAULT_COUNTRY)
    }

    /// Device manufacturer description (`dmnd`)
    pub fn manufacturer(&self) -> String {
        self.localized_text(TagSignature::DMND, DEFAULT_LANGUAGE, DEFAULT_COUNTRY)
    }

    /// Device model description (`dmdd`)
    pub fn model(&self) -> String {
        self.localized_text(TagSignature::DMDD, DEFAULT_LANGUAGE, DEFAULT_COUNTRY)
    }

    /// Get number of tags
    pub fn tag_count(&self) -> usize {
        self.entries.len()
    }
}
