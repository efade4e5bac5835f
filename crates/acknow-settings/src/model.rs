use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `acknow.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AcknowConfigV1 {
    /// Optional schema string for tooling (`acknow.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Whether the lock file `version` must agree with its layout: `lenient` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_check: Option<String>,

    /// Output format: `json` (default) or `markdown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Text placed before the acknowledgements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Text placed after the acknowledgements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}
