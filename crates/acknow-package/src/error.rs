use thiserror::Error;

use crate::LockSchema;

/// Why a lock file could not be decoded.
///
/// Only the error of the last layout attempted is reported; earlier layouts failing
/// is the routine way a newer file is recognized.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON or does not have the layout's required fields and types.
    #[error("lock file does not match the {schema} layout: {source}")]
    Structural {
        schema: LockSchema,
        source: serde_json::Error,
    },

    /// The layout matched but the root `version` does not belong to it.
    /// Only reported with [`VersionCheck::Strict`](crate::VersionCheck::Strict).
    #[error("lock file has the {schema} layout but declares version {version}")]
    VersionMismatch { schema: LockSchema, version: i64 },
}

impl DecodeError {
    /// The layout whose attempt produced this error.
    pub fn schema(&self) -> LockSchema {
        match self {
            DecodeError::Structural { schema, .. } | DecodeError::VersionMismatch { schema, .. } => {
                *schema
            }
        }
    }

    /// 1-based line and column of a structural error, when the parser reported one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            DecodeError::Structural { source, .. } if source.line() > 0 => {
                Some((source.line(), source.column()))
            }
            _ => None,
        }
    }
}
