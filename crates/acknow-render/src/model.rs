#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableAcknow {
    pub title: String,
    pub version: Option<String>,
    pub revision: Option<String>,
    pub repository: Option<String>,
    pub license: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableList {
    pub header_text: Option<String>,
    pub acknowledgements: Vec<RenderableAcknow>,
    pub footer_text: Option<String>,
}
