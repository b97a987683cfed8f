use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::store::{Connection, Profile};

/// The composed document: everything already stored for the user plus the
/// caller's template name, echoed back verbatim.
#[derive(Debug, Serialize)]
pub struct VisionMap {
    pub email: String,
    pub profile: Option<Profile>,
    pub network: Vec<Connection>,
    pub template: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct VisionMapResponse {
    pub vision_map: VisionMap,
}

/// Template name via query string.
#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

/// Template name via JSON body.
#[derive(Debug, Deserialize)]
pub struct TemplateBody {
    pub template: String,
}
