use serde::Serialize;

use crate::store::Connection;

/// Confirmation returned by the write endpoints.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub network: Vec<Connection>,
}
