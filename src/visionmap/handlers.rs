use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
    visionmap::dto::{TemplateBody, TemplateQuery, VisionMap, VisionMapResponse},
};

pub fn visionmap_routes() -> Router<AppState> {
    Router::new().route("/vision-map", post(compose))
}

/// Assembles the stored profile and network into a vision-map document.
/// An unset profile or empty network is fine; only an unknown user is an
/// error. The template name is not checked against the suggested values.
#[instrument(skip(state, body))]
pub async fn compose(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Query(query): Query<TemplateQuery>,
    body: Option<Json<TemplateBody>>,
) -> Result<Json<VisionMapResponse>, ApiError> {
    let template = query
        .template
        .or(body.map(|Json(b)| b.template))
        .ok_or_else(|| ApiError::BadRequest("template is required".into()))?;

    let user = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    info!(%email, %template, "vision map composed");
    Ok(Json(VisionMapResponse {
        vision_map: VisionMap {
            email: user.email,
            profile: user.profile,
            network: user.network,
            template,
            generated_at: OffsetDateTime::now_utc(),
        },
    }))
}
