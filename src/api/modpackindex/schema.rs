use serde::{Deserialize, Serialize};

use crate::models::modpack::ModpackRecord;

/// Response from GET /api/v1/mod/{modId}/modpacks
///
/// Only `data` is required; pagination metadata sent alongside it is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetModpacksResponse {
    pub data: Vec<ModpackRecord>,
}
