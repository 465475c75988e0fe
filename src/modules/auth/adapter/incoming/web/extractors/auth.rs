use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

/// Caller identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn token_provider(req: &HttpRequest) -> Option<&web::Data<Arc<dyn TokenProvider + Send + Sync>>> {
    req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(provider) = token_provider(req) else {
            tracing::error!("TokenProvider is not registered as app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.user_id(),
            })),
            Err(TokenError::TokenExpired) => ready(Err(create_api_error(
                ApiResponse::unauthorized("TOKEN_EXPIRED", "Token has expired"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Optional identity for pages that anonymous visitors may also open.
///
/// A missing or unusable token yields `MaybeUser(None)` instead of a 401.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl MaybeUser {
    pub fn user_id(&self) -> Option<&UserId> {
        self.0.as_ref().map(|u| &u.user_id)
    }
}

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = match (token_provider(req), extract_token_from_header(req)) {
            (Some(provider), Some(token)) => match provider.verify_token(&token) {
                Ok(claims) => Some(AuthenticatedUser {
                    user_id: claims.user_id(),
                }),
                Err(e) => {
                    tracing::debug!("Ignoring unusable token on optional auth route: {}", e);
                    None
                }
            },
            _ => None,
        };

        ready(Ok(MaybeUser(user)))
    }
}
