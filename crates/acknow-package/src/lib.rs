//! Decoder for Swift Package Manager `Package.resolved` lock files.
//!
//! The lock file layout changed between tool versions:
//! - v1 nests pins under `object.pins` and names them with `package`/`repositoryURL`
//! - v2 and later put `pins` at the root and use `identity`/`location`
//!
//! [`PackageLockDecoder`] hides the difference and always yields the normalized
//! [`acknow_types::AcknowList`]. This crate performs no IO.

#![forbid(unsafe_code)]

mod decoder;
mod error;
mod repository;
mod schema;

pub use decoder::{DecodedLock, PackageLockDecoder, VersionCheck};
pub use error::DecodeError;
pub use repository::parse_repository_url;
pub use schema::LockSchema;

/// Fuzz-friendly API for testing decoding robustness.
pub mod fuzz {
    use super::*;

    /// Decode arbitrary bytes with both version-check modes.
    ///
    /// Returns the number of entries decoded in lenient mode. **Never panics** on any input.
    pub fn decode(data: &[u8]) -> Result<usize, DecodeError> {
        let _ = PackageLockDecoder::new()
            .with_version_check(VersionCheck::Strict)
            .decode(data);
        let list = PackageLockDecoder::new().decode(data)?;
        Ok(list.len())
    }
}
