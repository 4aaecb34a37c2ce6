use serde::{Deserialize, Serialize};

/// Routing manifest served from `/actions.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

impl ActionRule {
    pub fn new(path_pattern: impl Into<String>, api_path: impl Into<String>) -> Self {
        Self {
            path_pattern: path_pattern.into(),
            api_path: api_path.into(),
        }
    }
}
