//! Registration and login.

use axum::extract::State;
use axum::Json;
use database::validation::{self, MAX_LABEL_LENGTH, MAX_PASSWORD_LENGTH};
use database::NewUser;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::extract::JsonBody;
use crate::password;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub email: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub user: String,
}

/// Create an account.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    validation::validate_email(&req.email)?;
    let email = req.email.trim().to_string();
    let full_name = validation::validate_required("full_name", &req.full_name, MAX_LABEL_LENGTH)?;
    validation::validate_required("password", &req.password, MAX_PASSWORD_LENGTH)?;

    let hashed_password = hash_blocking(req.password).await?;

    let user = NewUser {
        email: email.clone(),
        hashed_password,
        full_name: full_name.to_string(),
    };

    match database::user::create_user(state.db.pool(), &user).await {
        Ok(id) => info!(id, email = %email, "User registered"),
        Err(err) if err.is_conflict() => {
            return Err(ApiError::bad_request("Email already registered"));
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Json(RegisterResponse {
        status: "User Created",
        email,
    }))
}

/// Check credentials.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = match database::user::get_user_by_email(state.db.pool(), req.email.trim()).await {
        Ok(user) => user,
        Err(err) if err.is_not_found() => return Err(ApiError::bad_request("User not found")),
        Err(err) => return Err(err.into()),
    };

    let stored = user.hashed_password.clone();
    let verified = tokio::task::spawn_blocking(move || {
        password::verify_password(&req.password, &stored)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !verified {
        warn!(email = %user.email, "Login rejected");
        return Err(ApiError::bad_request("Incorrect password"));
    }

    if password::needs_rehash(&user.hashed_password) {
        warn!(email = %user.email, "Account still uses a legacy unsalted password hash");
    }

    info!(email = %user.email, "Login successful");

    Ok(Json(LoginResponse {
        status: "Login Successful",
        user: user.full_name,
    }))
}

async fn hash_blocking(plain: String) -> Result<String> {
    tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
}
