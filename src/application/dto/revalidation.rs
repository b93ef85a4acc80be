use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevalidationDto {
    pub revalidated: bool,
    pub entity_id: String,
    /// Milliseconds since the Unix epoch.
    pub now: i64,
}
