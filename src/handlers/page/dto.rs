use serde::Deserialize;

/// Address form posted by the page
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub address: String,
}
