//! Users endpoint.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::error::ApiResult;
use super::state::HttpState;
use crate::domain::User;

#[derive(Serialize)]
struct UserDto {
    username: String,
    name: String,
    avatar_url: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            avatar_url: user.avatar_url,
        }
    }
}

#[derive(Serialize)]
struct UserEnvelope {
    user: UserDto,
}

/// `GET /api/users/{username}` — one user, as `{"user": {...}}`.
///
/// Usernames are resolved purely by existence; there is no syntactic
/// validation step and therefore no 400 path here.
pub async fn fetch_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user = state.users.fetch_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserEnvelope {
        user: UserDto::from(user),
    }))
}
