use axum::response::IntoResponse;
use axum::Json;

use crate::domain::MeResponse;
use crate::utils::auth::AuthenticatedUser;

// Claims recovered by the extractor are echoed back; role allow-list checks
// on top of them belong to the resource routes, not here.
pub async fn me(AuthenticatedUser(claims): AuthenticatedUser) -> impl IntoResponse {
    Json(MeResponse {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
