//! JWT Authentication middleware.
//!
//! Decodes the Bearer token when one is present and stores the claims in
//! the request extensions. Requests without an Authorization header pass
//! through untouched; which routes actually require claims is decided in
//! the handlers via [`crate::middleware::auth_helpers`]. A header that is
//! malformed or fails validation is rejected with 401 here.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::constants::{ERR_INVALID_AUTH_HEADER, ERR_INVALID_TOKEN};
use crate::errors::ApiError;
use crate::services::auth_service;

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);

            if let Some(header_value) = auth_header {
                let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
                    Error::from(ApiError::Unauthorized(ERR_INVALID_AUTH_HEADER.to_string()))
                })?;

                let claims = auth_service::decode_token(token)
                    .map_err(|_| ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string()))?;

                req.extensions_mut().insert(claims);
            }

            service.call(req).await
        })
    }
}
