use serde::{Deserialize, Serialize};

/// A kind of event a customer can plan (wedding, birthday, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
