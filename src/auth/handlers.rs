use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
        jwt::JwtKeys,
        password::{dummy_verify, hash_password, verify_password},
        repo::{is_unique_violation, User},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    let name = payload.name.trim();

    if name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("register with missing fields");
        return Err(ApiError::Validation(
            "Name, email and password are required".into(),
        ));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Please provide a valid email".into()));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    let hash = hash_password(&payload.password)?;

    // The unique index still wins if two registrations race past the
    // pre-check.
    let user = match User::create(&state.db, name, &payload.email, &hash).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %payload.email, "email already registered");
            return Err(ApiError::DuplicateEmail);
        }
        Err(e) => return Err(e.into()),
    };

    let token = JwtKeys::from_ref(&state).sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Registration successful".into(),
            token,
            user: PublicUser {
                id: user.id,
                name: user.name,
                email: user.email,
                created_at: Some(user.created_at),
            },
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation("Email and password are required".into()));
    }

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            // Burn a verification so an unknown email costs the same as a
            // wrong password.
            dummy_verify(&payload.password);
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(&state).sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".into(),
        token,
        user: PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: None,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("a.b+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("ann@x"));
        assert!(!is_valid_email("ann @x.com"));
        assert!(!is_valid_email("ann@@x.com"));
    }
}
