use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::inbound::http::session::SessionData;
use crate::inbound::http::session::TokenKind;

pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let profile = state
        .user_service
        .login(LoginCommand::new(body.username, body.email, body.password))
        .await
        .map_err(|e| {
            tracing::info!(kind = ?e.kind(), "Login failed");
            ApiError::from(e)
        })?;

    let access_token = issue_token(&state, &profile, TokenKind::Access)?;
    let refresh_token = issue_token(&state, &profile, TokenKind::Refresh)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            success: true,
            user: (&profile).into(),
            access_token,
            refresh_token,
        },
    ))
}

fn issue_token(
    state: &AppState,
    profile: &UserProfile,
    kind: TokenKind,
) -> Result<String, ApiError> {
    state
        .token_issuer
        .issue(
            SessionData::new(profile, kind),
            state.token_lifetimes.for_kind(kind),
        )
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))
}

/// Either identifier may be omitted; a non-empty username wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub success: bool,
    pub user: LoginUserData,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserData {
    pub username: String,
    pub email: String,
    pub name: String,
}

impl From<&UserProfile> for LoginUserData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.as_str().to_string(),
            email: profile.email.as_str().to_string(),
            name: profile.name.clone(),
        }
    }
}
