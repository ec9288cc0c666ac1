//! # cyan-icc
//!
//! ICC color profile handling for the Cyan image editor.
//!
//! ## Features
//!
//! - **Metadata**: description, manufacturer, copyright and color space of a
//!   profile, from a file or an in-memory buffer
//! - **Defaults**: built-in RGB, CMYK and gray profiles, synthesized in-process
//! - **Editing**: rewrite description and copyright, keeping every other tag
//!   byte-for-byte, with atomic file replacement
//! - **Discovery**: profiles installed in the platform's ICC directories
//!
//! The container codec lives in [`icc`] and is usable on its own.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cyan_icc::{ColorSpaceKind, ProfileService};
//!
//! let service = ProfileService::new();
//!
//! let kind = service.color_space_from_file("photo.icc")?;
//! let name = service.description_from_file("photo.icc")?;
//! println!("{name}: {kind}");
//!
//! for profile in service.list_builtin_profiles(ColorSpaceKind::Rgb) {
//!     println!("built-in: {}", profile.name);
//! }
//!
//! service.edit_profile("photo.icc", "proof.icc", "Press proof", "(c) Studio")?;
//! # Ok::<(), cyan_icc::Error>(())
//! ```

pub mod color;
pub mod defaults;
pub mod error;
pub mod icc;
pub mod profile;
pub mod search;
pub mod service;
pub mod types;

pub use defaults::{BuiltinProfile, DefaultProfileSet};
pub use error::{Error, Result};
pub use profile::ProfileMetadata;
pub use search::{InstalledProfile, SearchPaths, scan_profiles};
pub use service::ProfileService;
pub use types::{ColorSpaceKind, ProfileBlob};

/// Version of cyan-icc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
