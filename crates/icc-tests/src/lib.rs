//! # icc-tests
//!
//! Cross-CMS parity and scenario testing for cyan-icc.
//!
//! This crate provides:
//! - Fixture profiles: the built-in set, profiles serialized by lcms2, and
//!   hand-assembled edge cases
//! - Reference readers that extract the same metadata through lcms2,
//!   moxcms and qcms
//! - Seeded garbage generation for malformed-input tests
//!
//! ## Reference Implementations
//!
//! - **lcms2**: Industry standard, full ICC support
//! - **moxcms**: Pure Rust, also the source of the built-in RGB primaries
//! - **qcms**: Firefox's CMS (RGB display profiles only)

pub mod fixtures;
pub mod reference;

pub use fixtures::{Fixture, builtin_fixtures, garbage, write_fixture};
pub use reference::{ReferenceMetadata, lcms2_metadata};
