//! ICC Profile Container
//!
//! Reading and writing of the ICC.1 container format, enough to inspect
//! and edit descriptive metadata and to generate simple profiles.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap)
//!
//! # Example
//!
//! ```
//! use cyan_icc::icc::{IccProfile, TagSignature, rewrite_text_tags};
//!
//! # let bytes = cyan_icc::DefaultProfileSet::builtin().default_for(cyan_icc::ColorSpaceKind::Gray).unwrap();
//! let edited = rewrite_text_tags(&bytes, &[(TagSignature::DESC, "Press proof")])?;
//! assert_eq!(IccProfile::parse(&edited)?.description(), "Press proof");
//! # Ok::<(), cyan_icc::icc::IccError>(())
//! ```

pub mod header;
pub mod tags;

mod edit;
mod error;
mod parser;
mod types;
mod writer;

pub use edit::{encode_text_tag, rewrite_text_tags};
pub use error::IccError;
pub use header::{ColorSpace, IccHeader, ProfileClass, ProfileVersion, RenderingIntent};
pub use parser::{DEFAULT_COUNTRY, DEFAULT_LANGUAGE, IccProfile, TagEntry};
pub use tags::{CurveData, Lut16Data, TagData, TextData, XyzTagData};
pub use types::{DateTimeNumber, S15Fixed16, TagSignature, TypeSignature, U8Fixed8, XyzNumber};
pub use writer::ProfileWriter;
