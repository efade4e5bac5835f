use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// One acknowledged dependency.
///
/// Decoders fill what their source knows. `text` and `license` are reserved for
/// sources that carry license material; lock file decoders leave them empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Acknow {
    /// Display name: package name or identity, as written by the source.
    /// Not validated; an empty name in the source stays empty.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Url>,

    /// Resolved version, as recorded by the package manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Resolved content hash or commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl Acknow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
            license: None,
            repository: None,
            version: None,
            revision: None,
        }
    }
}

/// An ordered list of acknowledgements.
///
/// Header and footer text are assembled by whoever combines sources; a single
/// decoder never sets them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AcknowList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    pub acknowledgements: Vec<Acknow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
}

impl AcknowList {
    pub fn new(acknowledgements: Vec<Acknow>) -> Self {
        Self {
            header_text: None,
            acknowledgements,
            footer_text: None,
        }
    }

    pub fn len(&self) -> usize {
        self.acknowledgements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acknowledgements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_serialized() {
        let list = AcknowList::new(vec![Acknow::new("AcknowList")]);
        let json = serde_json::to_value(&list).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "acknowledgements": [{ "title": "AcknowList" }] })
        );
    }

    #[test]
    fn repository_serializes_as_url_string() {
        let mut acknow = Acknow::new("thirdpartymailer");
        acknow.repository =
            Some(Url::parse("https://github.com/vtourraine/ThirdPartyMailer.git").expect("url"));
        acknow.version = Some("2.1.0".to_string());

        let json = serde_json::to_value(&acknow).expect("serialize");
        assert_eq!(
            json["repository"],
            "https://github.com/vtourraine/ThirdPartyMailer.git"
        );
        assert_eq!(json["version"], "2.1.0");

        let back: Acknow = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, acknow);
    }

    #[test]
    fn empty_list_reports_empty() {
        let list = AcknowList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.header_text.is_none());
        assert!(list.footer_text.is_none());
    }
}
