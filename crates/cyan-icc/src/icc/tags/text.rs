//! Text Tag Types
//!
//! ICC profiles can contain text in several formats:
//! - text: Simple ASCII text
//! - desc: Profile description (v2 format)
//! - mluc: Multi-localized Unicode (v4 format)
//!
//! See ICC.1:2022 Sections 10.24 (text), 10.14 (desc), 10.15 (mluc) and
//! ICC.1:2001-04 Section 6.5.17 (textDescriptionType).
//!
//! All parsers take the whole tag element, type signature included, because
//! `mluc` string offsets are relative to the start of the element.

use crate::icc::error::IccError;
use crate::icc::types::{TypeSignature, read_u32};

/// Size of the type signature plus reserved bytes that open every tag element
const ELEMENT_HEADER: usize = 8;

/// Size of one `mluc` name record
const MLUC_RECORD_SIZE: usize = 12;

/// Fixed size of the ScriptCode part of a `desc` element
const SCRIPTCODE_SIZE: usize = 2 + 1 + 67;

/// One localized string of an `mluc` tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedString {
    /// ISO 639-1 language code, e.g. `en`
    pub language: String,
    /// ISO 3166-1 country code, e.g. `US`
    pub country: String,
    pub text: String,
}

/// Decoded text tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextData {
    /// `text` or `desc`: a single unlocalized string
    Plain(String),
    /// `mluc`: records in stored order
    Localized(Vec<LocalizedString>),
}

impl TextData {
    /// Parse 'text' type (7-bit ASCII, NUL-terminated; read as Latin-1)
    pub fn parse_text(element: &[u8]) -> Result<Self, IccError> {
        let body = element.get(ELEMENT_HEADER..).ok_or_else(|| {
            IccError::CorruptedData("Text tag too small".to_string())
        })?;
        Ok(Self::Plain(latin1_until_nul(body)))
    }

    /// Parse 'desc' type (v2 textDescriptionType)
    ///
    /// A non-empty Unicode part wins, since the ASCII part cannot carry
    /// non-ASCII text. The ASCII part is used when the Unicode part is
    /// empty, missing or truncated.
    pub fn parse_desc(element: &[u8]) -> Result<Self, IccError> {
        let ascii_count = read_u32(element, ELEMENT_HEADER).ok_or_else(|| {
            IccError::CorruptedData("Description tag too small".to_string())
        })? as usize;

        let ascii_start = ELEMENT_HEADER + 4;
        let ascii = ascii_start
            .checked_add(ascii_count)
            .and_then(|end| element.get(ascii_start..end))
            .ok_or_else(|| {
                IccError::CorruptedData("Description ASCII data truncated".to_string())
            })?;

        // Unicode part: language code (u32), count (u32, in characters), UTF-16BE
        let unicode_start = ascii_start + ascii_count;
        let unicode = read_u32(element, unicode_start + 4)
            .and_then(|count| {
                let start = unicode_start + 8;
                let end = start.checked_add((count as usize).checked_mul(2)?)?;
                element.get(start..end)
            })
            .map(decode_utf16be)
            .unwrap_or_default();

        if !unicode.is_empty() {
            return Ok(Self::Plain(unicode));
        }
        Ok(Self::Plain(latin1_until_nul(ascii)))
    }

    /// Parse 'mluc' type (multi-localized Unicode)
    pub fn parse_mluc(element: &[u8]) -> Result<Self, IccError> {
        let (Some(record_count), Some(record_size)) = (
            read_u32(element, ELEMENT_HEADER),
            read_u32(element, ELEMENT_HEADER + 4),
        ) else {
            return Err(IccError::CorruptedData("mluc tag too small".to_string()));
        };
        let record_count = record_count as usize;
        let record_size = record_size as usize;

        if record_size < MLUC_RECORD_SIZE {
            return Err(IccError::CorruptedData(
                "mluc record size too small".to_string(),
            ));
        }

        let records_start = ELEMENT_HEADER + 8;
        let records_len = record_count
            .checked_mul(record_size)
            .filter(|&len| len <= element.len().saturating_sub(records_start))
            .ok_or_else(|| IccError::CorruptedData("mluc records truncated".to_string()))?;

        let mut localized = Vec::with_capacity(record_count);
        for record in element[records_start..records_start + records_len].chunks_exact(record_size)
        {
            let language = ascii_code(&record[0..2]);
            let country = ascii_code(&record[2..4]);

            let str_len = u32::from_be_bytes([record[4], record[5], record[6], record[7]]) as usize;
            let str_offset =
                u32::from_be_bytes([record[8], record[9], record[10], record[11]]) as usize;

            let utf16 = str_offset
                .checked_add(str_len)
                .and_then(|end| element.get(str_offset..end))
                .ok_or_else(|| {
                    IccError::CorruptedData(format!(
                        "mluc string for {}-{} out of bounds",
                        language, country
                    ))
                })?;

            localized.push(LocalizedString {
                language,
                country,
                text: decode_utf16be(utf16),
            });
        }

        Ok(Self::Localized(localized))
    }

    /// Resolve to a single string for a locale.
    ///
    /// `mluc` lookup prefers an exact language/country match, then the same
    /// language, then the first record.
    pub fn resolve(&self, language: &str, country: &str) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(records) => records
                .iter()
                .find(|r| r.language == language && r.country == country)
                .or_else(|| records.iter().find(|r| r.language == language))
                .or_else(|| records.first())
                .map(|r| r.text.as_str())
                .unwrap_or_default(),
        }
    }

    /// Encode as 'text' type. Characters outside 7-bit ASCII become `?`.
    pub fn encode_text(text: &str) -> Vec<u8> {
        let ascii = to_ascii_lossy(text);
        let mut out = Vec::with_capacity(ELEMENT_HEADER + ascii.len() + 1);
        out.extend_from_slice(&TypeSignature::TEXT.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&ascii);
        out.push(0);
        out
    }

    /// Encode as v2 'desc' type with ASCII and Unicode parts and an empty
    /// ScriptCode part.
    pub fn encode_desc(text: &str) -> Vec<u8> {
        let ascii = to_ascii_lossy(text);
        let utf16: Vec<u16> = text.encode_utf16().filter(|&c| c != 0).collect();

        let mut out = Vec::with_capacity(
            ELEMENT_HEADER + 4 + ascii.len() + 1 + 8 + (utf16.len() + 1) * 2 + SCRIPTCODE_SIZE,
        );
        out.extend_from_slice(&TypeSignature::DESC.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);

        out.extend_from_slice(&(ascii.len() as u32 + 1).to_be_bytes());
        out.extend_from_slice(&ascii);
        out.push(0);

        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&(utf16.len() as u32 + 1).to_be_bytes());
        for unit in &utf16 {
            out.extend_from_slice(&unit.to_be_bytes());
        }
        out.extend_from_slice(&[0, 0]);

        out.extend_from_slice(&[0u8; SCRIPTCODE_SIZE]);
        out
    }

    /// Encode as 'mluc' type with a single en-US record
    pub fn encode_mluc(text: &str) -> Vec<u8> {
        let utf16: Vec<u8> = text
            .encode_utf16()
            .filter(|&c| c != 0)
            .flat_map(u16::to_be_bytes)
            .collect();
        let string_offset = (ELEMENT_HEADER + 8 + MLUC_RECORD_SIZE) as u32;

        let mut out = Vec::with_capacity(string_offset as usize + utf16.len());
        out.extend_from_slice(&TypeSignature::MLUC.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&1u32.to_be_bytes());
        out.extend_from_slice(&(MLUC_RECORD_SIZE as u32).to_be_bytes());
        out.extend_from_slice(b"enUS");
        out.extend_from_slice(&(utf16.len() as u32).to_be_bytes());
        out.extend_from_slice(&string_offset.to_be_bytes());
        out.extend_from_slice(&utf16);
        out
    }
}

/// Read bytes up to the first NUL as Latin-1
fn latin1_until_nul(data: &[u8]) -> String {
    data.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

fn ascii_code(data: &[u8]) -> String {
    data.iter()
        .filter(|b| b.is_ascii_graphic())
        .map(|&b| b as char)
        .collect()
}

fn to_ascii_lossy(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|&c| c != '\0')
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

/// Decode UTF-16BE bytes, stopping at the first NUL code unit.
/// A trailing odd byte is ignored.
fn decode_utf16be(data: &[u8]) -> String {
    let utf16: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .take_while(|&c| c != 0)
        .collect();

    String::from_utf16_lossy(&utf16)
}
