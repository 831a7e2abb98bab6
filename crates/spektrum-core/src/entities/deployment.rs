use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Entry point of a project's deployed application in one environment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppEntryPoint {
    pub module_id: String,
    pub asset_base_url: String,
    pub public_app_url: String,
}
