// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access-request intake endpoint.
//!
//! Submissions are logged for an administrator to act on out of band;
//! nothing is persisted and nothing is auto-approved.

use axum::Json;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Contact address of the requester
    pub email: Option<String>,
}

/// Acknowledgement of a submitted access request.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// Submit an access request.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Request submitted", body = RegisterResponse),
        (status = 400, description = "Missing or malformed email"),
    )
)]
pub async fn register(
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Some(email) = request.email.filter(|email| !email.is_empty()) else {
        return Err(ApiError::bad_request("Email is required"));
    };

    if !EMAIL_SHAPE.is_match(&email) {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    tracing::info!(%email, "registration request received");

    Ok(Json(RegisterResponse {
        success: true,
        message: "Access request submitted. Administrator will review your request and contact you directly."
            .to_string(),
    }))
}
