// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::{NetworkOwnership, NftOwnership},
    models::{PublicUser, Role, UserStatus},
    state::AppState,
};

pub mod health;
pub mod login;
pub mod nft;
pub mod register;

pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(login::login))
        .route("/register", post(register::register))
        .route("/nft-auth", post(nft::nft_auth))
        .route("/verify-nft", post(nft::verify_nft))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .merge(auth_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        login::login,
        register::register,
        nft::nft_auth,
        nft::verify_nft
    ),
    components(
        schemas(
            PublicUser,
            Role,
            UserStatus,
            NftOwnership,
            NetworkOwnership,
            health::HealthResponse,
            login::LoginRequest,
            login::LoginResponse,
            register::RegisterRequest,
            register::RegisterResponse,
            nft::NftAuthRequest,
            nft::NftAuthResponse,
            nft::VerifyNftRequest,
            nft::VerifyNftResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Auth", description = "Password and wallet authentication")
    )
)]
struct ApiDoc;
