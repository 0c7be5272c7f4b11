use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        payload.username.as_deref().filter(|v| !v.is_empty()),
        payload.email.as_deref().filter(|v| !v.is_empty()),
        payload.password.as_deref().filter(|v| !v.is_empty()),
    ) else {
        warn!("registration rejected: missing fields");
        return Err(ApiError::Validation(
            "username, email and password are required".into(),
        ));
    };

    let hash = hash_password(password)?;
    // A duplicate email or username comes back as a unique violation and
    // maps to 409 rather than tearing the request down.
    let user = User::create(&state.db, username, email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user_id: user.id,
        }),
    ))
}

#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (
        payload.email.as_deref().filter(|v| !v.is_empty()),
        payload.password.as_deref().filter(|v| !v.is_empty()),
    ) else {
        warn!("login rejected: missing fields");
        return Err(ApiError::Validation("email and password are required".into()));
    };

    // Unknown email and wrong password produce the same response so that
    // the endpoint cannot be used to probe which addresses exist.
    let user = User::find_by_email(&state.db, email).await?.ok_or_else(|| {
        warn!("login failed: unknown email");
        ApiError::Unauthenticated("Authentication failed".into())
    })?;

    if !verify_password(password, &user.password_hash) {
        warn!(user_id = user.id, "login failed: invalid password");
        return Err(ApiError::Unauthenticated("Authentication failed".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.issue(user.id, &user.email)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}
