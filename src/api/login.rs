// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password login endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::{login as login_flow, AuthError};
use crate::models::PublicUser;
use crate::state::AppState;

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login handle
    pub login: Option<String>,
    /// Raw password
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    /// Authenticated user, password material stripped
    pub user: PublicUser,
    /// Bearer token for the search backend
    pub token: String,
}

/// Authenticate a login/password pair.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let credentials = request
        .login
        .filter(|login| !login.is_empty())
        .zip(request.password.filter(|password| !password.is_empty()));
    let Some((login_name, password)) = credentials else {
        return Err(AuthError::MissingFields("Login and password are required"));
    };

    let (user, token) =
        login_flow::authenticate(&state.credentials, &state.sessions, &login_name, &password)
            .await?;

    Ok(Json(LoginResponse {
        success: true,
        user,
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{password, CredentialStore, SessionIssuer};
    use crate::blockchain::{NetworkConfig, NftVerifier};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn test_state() -> AppState {
        let stored = password::hash("Secret123!").unwrap();
        let entry = format!("alice:{stored}:alice@x.com:admin:active");
        let store =
            CredentialStore::from_lookup(|index| (index == 1).then(|| entry.clone())).unwrap();
        let verifier = NftVerifier::new(vec![NetworkConfig {
            name: "Test".to_string(),
            chain_id: 1,
            rpc_url: "http://127.0.0.1:1/".to_string(),
            contract_address: "0xC1C4d4A5A384DE53BcFadB43D0e8b08966195757".to_string(),
        }])
        .unwrap();
        AppState::new(store, SessionIssuer::new("testsecret"), verifier)
    }

    #[tokio::test]
    async fn login_success_returns_user_and_token() {
        let Json(response) = login(
            State(test_state()),
            Json(LoginRequest {
                login: Some("alice".to_string()),
                password: Some("Secret123!".to_string()),
            }),
        )
        .await
        .expect("login succeeds");

        assert!(response.success);
        assert_eq!(response.user.login, "alice");
        assert!(response.token.starts_with("testsecret_"));
    }

    #[tokio::test]
    async fn missing_fields_return_400() {
        let error = login(
            State(test_state()),
            Json(LoginRequest {
                login: Some("alice".to_string()),
                password: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bad_credentials_return_401() {
        let error = login(
            State(test_state()),
            Json(LoginRequest {
                login: Some("alice".to_string()),
                password: Some("wrong".to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(error.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
