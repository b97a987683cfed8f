use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Industry categories offered to clients for the connection picker.
/// Connection payloads are not checked against this list.
pub const INDUSTRIES: [&str; 10] = [
    "IT Industry",
    "Finance Industry",
    "Healthcare Industry",
    "Education Industry",
    "Manufacturing Industry",
    "Retail Industry",
    "Consulting Industry",
    "Media & Entertainment",
    "Real Estate",
    "Government & Public Sector",
];

/// Vision statements offered to clients for the profile picker.
pub const VISIONS: [&str; 8] = [
    "Innovation Leader",
    "Problem Solver",
    "Team Builder",
    "Strategic Thinker",
    "Customer Champion",
    "Growth Driver",
    "Quality Expert",
    "Sustainability Advocate",
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/industries", get(industries))
        .route("/visions", get(visions))
}

async fn industries() -> Json<Value> {
    Json(json!({ "industries": INDUSTRIES }))
}

async fn visions() -> Json<Value> {
    Json(json!({ "visions": VISIONS }))
}
