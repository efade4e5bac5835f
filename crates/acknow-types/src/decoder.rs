use crate::AcknowList;

/// A source of acknowledgements.
///
/// Implementations turn the raw bytes of one input (a lock file, a plist, ...)
/// into the normalized [`AcknowList`]. Decoders must be pure: no IO, no shared state.
pub trait AcknowDecoder {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, data: &[u8]) -> Result<AcknowList, Self::Error>;
}
