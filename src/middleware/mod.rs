/// HTTP middleware: bearer-session authentication.
///
/// The gate requires both halves to agree: the token must verify
/// cryptographically AND a live session row must still exist for it. A token
/// that passes signature/expiry checks but was invalidated by logout is
/// rejected.
use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::app_state::AppState;
use crate::error::AppError;

/// Caller identity stored in request extensions after authentication.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

/// The raw bearer token, kept for operations that act on the session itself
/// (logout).
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    Error::from(AppError::Internal("application state missing".to_string()))
                })?;

            let user_id = state.sessions.authenticate(&token).await.map_err(Error::from)?;

            req.extensions_mut().insert(UserId(user_id));
            req.extensions_mut().insert(AccessToken(token));

            service.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Result<String, Error> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            Error::from(AppError::Unauthorized(
                "Authorization header required".to_string(),
            ))
        })?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        return Err(Error::from(AppError::Unauthorized(
            "Authorization header required".to_string(),
        )));
    }

    Ok(token.to_string())
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(req.extensions().get::<UserId>().copied().ok_or_else(|| {
            Error::from(AppError::Unauthorized("Please login first...".to_string()))
        }))
    }
}

impl FromRequest for AccessToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(req.extensions().get::<AccessToken>().cloned().ok_or_else(|| {
            Error::from(AppError::Unauthorized("Access token required".to_string()))
        }))
    }
}
