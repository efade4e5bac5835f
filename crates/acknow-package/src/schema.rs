//! Raw `Package.resolved` layouts.
//!
//! These types exist only for the duration of one decode call. Unknown fields are
//! ignored so newer tool versions (v3 adds `originHash`, `kind`, `state.branch`)
//! still decode.

use acknow_types::Acknow;
use serde::Deserialize;
use std::fmt;

use crate::repository::parse_repository_url;

/// Supported lock file layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LockSchema {
    /// `{ "object": { "pins": [...] }, "version": 1 }`
    V1,
    /// `{ "pins": [...], "version": 2 }` and later.
    V2,
}

impl LockSchema {
    /// Order in which layouts are attempted. Oldest first: a v1 file must never be
    /// read through a looser, newer layout.
    pub const PRIORITY: [LockSchema; 2] = [LockSchema::V1, LockSchema::V2];

    pub fn as_str(self) -> &'static str {
        match self {
            LockSchema::V1 => "v1",
            LockSchema::V2 => "v2+",
        }
    }

    /// Whether the root `version` integer is one this layout is expected to carry.
    pub fn accepts_version(self, version: i64) -> bool {
        match self {
            LockSchema::V1 => version == 1,
            LockSchema::V2 => version >= 2,
        }
    }

    pub(crate) fn parse(self, data: &[u8]) -> Result<RawLockFile, serde_json::Error> {
        match self {
            LockSchema::V1 => serde_json::from_slice::<v1::Root>(data).map(RawLockFile::V1),
            LockSchema::V2 => serde_json::from_slice::<v2::Root>(data).map(RawLockFile::V2),
        }
    }
}

impl fmt::Display for LockSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub(crate) enum RawLockFile {
    V1(v1::Root),
    V2(v2::Root),
}

impl RawLockFile {
    pub(crate) fn version(&self) -> i64 {
        match self {
            RawLockFile::V1(root) => root.version,
            RawLockFile::V2(root) => root.version,
        }
    }

    pub(crate) fn into_acknowledgements(self) -> Vec<Acknow> {
        match self {
            RawLockFile::V1(root) => root
                .object
                .pins
                .into_iter()
                .map(v1::Pin::into_acknow)
                .collect(),
            RawLockFile::V2(root) => root.pins.into_iter().map(v2::Pin::into_acknow).collect(),
        }
    }
}

fn repository_from(location: &str, title: &str) -> Option<url::Url> {
    let repository = parse_repository_url(location);
    if repository.is_none() {
        tracing::debug!(
            pin = title,
            location,
            "pin location is not a URL; repository left empty"
        );
    }
    repository
}

pub(crate) mod v1 {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub(crate) struct Root {
        pub(crate) object: Object,
        pub(crate) version: i64,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Object {
        pub(crate) pins: Vec<Pin>,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Pin {
        package: String,
        #[serde(rename = "repositoryURL")]
        repository_url: String,
        state: Option<State>,
    }

    #[derive(Debug, Deserialize)]
    struct State {
        // Type-checked as part of the layout; the normalized model has no slot for it.
        #[allow(dead_code)]
        branch: Option<String>,
        revision: Option<String>,
        version: Option<String>,
    }

    impl Pin {
        pub(crate) fn into_acknow(self) -> Acknow {
            let repository = repository_from(&self.repository_url, &self.package);
            let (version, revision) = match self.state {
                Some(state) => (state.version, state.revision),
                None => (None, None),
            };
            Acknow {
                title: self.package,
                text: None,
                license: None,
                repository,
                version,
                revision,
            }
        }
    }
}

pub(crate) mod v2 {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub(crate) struct Root {
        pub(crate) pins: Vec<Pin>,
        pub(crate) version: i64,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Pin {
        identity: String,
        location: String,
        state: Option<State>,
    }

    #[derive(Debug, Deserialize)]
    struct State {
        revision: Option<String>,
        version: Option<String>,
    }

    impl Pin {
        pub(crate) fn into_acknow(self) -> Acknow {
            let repository = repository_from(&self.location, &self.identity);
            let (version, revision) = match self.state {
                Some(state) => (state.version, state.revision),
                None => (None, None),
            };
            Acknow {
                title: self.identity,
                text: None,
                license: None,
                repository,
                version,
                revision,
            }
        }
    }
}
