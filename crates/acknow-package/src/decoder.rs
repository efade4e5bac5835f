use acknow_types::{AcknowDecoder, AcknowList};

use crate::DecodeError;
use crate::schema::{LockSchema, RawLockFile};

/// How much the root `version` integer is trusted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionCheck {
    /// The layout is inferred from shape alone; `version` is not inspected.
    #[default]
    Lenient,
    /// `version` must agree with the matched layout (1 for v1, 2 or more for v2+).
    Strict,
}

/// A decoded lock file along with what was recognized about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedLock {
    pub schema: LockSchema,
    /// The root `version` integer as written in the file.
    pub version: i64,
    pub list: AcknowList,
}

/// Decodes `Package.resolved` files of any supported layout into an [`AcknowList`].
///
/// Each pin becomes one entry, in file order. Header and footer text are never set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackageLockDecoder {
    version_check: VersionCheck,
}

impl PackageLockDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version_check(mut self, version_check: VersionCheck) -> Self {
        self.version_check = version_check;
        self
    }

    pub fn version_check(&self) -> VersionCheck {
        self.version_check
    }

    /// Decode a lock file into the normalized list.
    pub fn decode(&self, data: &[u8]) -> Result<AcknowList, DecodeError> {
        self.decode_detailed(data).map(|decoded| decoded.list)
    }

    /// Decode a lock file and report which layout matched.
    pub fn decode_detailed(&self, data: &[u8]) -> Result<DecodedLock, DecodeError> {
        let [first, rest @ ..] = LockSchema::PRIORITY;
        let mut attempt = self.try_schema(first, data);
        for schema in rest {
            if attempt.is_ok() {
                break;
            }
            attempt = self.try_schema(schema, data);
        }

        let (schema, raw) = attempt?;
        let version = raw.version();
        let list = AcknowList::new(raw.into_acknowledgements());
        tracing::debug!(%schema, version, entries = list.len(), "decoded lock file");

        Ok(DecodedLock {
            schema,
            version,
            list,
        })
    }

    fn try_schema(
        &self,
        schema: LockSchema,
        data: &[u8],
    ) -> Result<(LockSchema, RawLockFile), DecodeError> {
        let raw = schema.parse(data).map_err(|source| {
            tracing::debug!(%schema, error = %source, "lock file does not match layout");
            DecodeError::Structural { schema, source }
        })?;

        let version = raw.version();
        if self.version_check == VersionCheck::Strict && !schema.accepts_version(version) {
            tracing::debug!(%schema, version, "layout matched but version disagrees");
            return Err(DecodeError::VersionMismatch { schema, version });
        }

        Ok((schema, raw))
    }
}

impl AcknowDecoder for PackageLockDecoder {
    type Error = DecodeError;

    fn decode(&self, data: &[u8]) -> Result<AcknowList, Self::Error> {
        PackageLockDecoder::decode(self, data)
    }
}
