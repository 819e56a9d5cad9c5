use crate::cookie::extract_session_cookie;
use crate::session::SessionState;
use async_trait::async_trait;
use axum::{Router, body::Body};
use core::pin::Pin;
use http::{Method, Request, Response, StatusCode};
use std::task::{Context, Poll};
use thiserror::Error;
use tower::{Layer, Service, ServiceBuilder};

/// Adds session authentication middleware to a http router.
pub fn add_session_auth_middleware<A>(
    router: Router,
    session_validator: A,
    no_auth: Vec<String>,
) -> Router
where
    A: SessionValidator + Clone + 'static,
{
    let layer = SessionAuthLayer {
        session_validator,
        no_auth,
    };
    router.layer(ServiceBuilder::new().layer(layer))
}

/// Trait for types that can validate a session id and return session state.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validates a given session id.
    ///
    /// # Returns
    /// - Ok(SessionState) if the session is live and authenticated.
    /// - ValidateSessionErr::Unauthenticated if the session is missing,
    ///   expired, or not logged in
    async fn validate_session(&self, session_id: String)
    -> Result<SessionState, ValidateSessionErr>;
}

/// Authentication layer that validates the session cookie of incoming
/// requests.
///
/// After successful validation the middleware inserts the session state
/// into the request's extensions allowing handlers to access the user.
#[derive(Clone)]
struct SessionAuthLayer<V> {
    /// The session validator used to check authentication.
    pub session_validator: V,

    /// Request uri paths for which authentication should be skipped.
    pub no_auth: Vec<String>,
}

/// Service produced by [`SessionAuthLayer`] that authenticates requests with
/// a session cookie.
#[derive(Clone)]
struct SessionAuthService<S, V> {
    /// The inner service.
    pub inner: S,

    /// The session validator used to check authentication.
    pub session_validator: V,

    /// Request uri paths for which authentication should be skipped.
    pub no_auth: Vec<String>,
}

impl<S, V: Clone> Layer<S> for SessionAuthLayer<V> {
    type Service = SessionAuthService<S, V>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionAuthService {
            inner,
            session_validator: self.session_validator.clone(),
            no_auth: self.no_auth.clone(),
        }
    }
}

impl<S, ReqBody, Validator> Service<Request<ReqBody>> for SessionAuthService<S, Validator>
where
    S: Service<Request<ReqBody>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    Validator: SessionValidator + Clone + Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<ReqBody>) -> Self::Future {
        // Allow preflight
        if request.method() == Method::OPTIONS {
            return Box::pin(self.inner.call(request));
        }

        // Allow certain paths with no auth
        if self.no_auth.contains(&request.uri().path().to_string()) {
            return Box::pin(self.inner.call(request));
        }

        // Be careful when cloning inner services:
        //
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let validator = self.session_validator.clone();

        Box::pin(async move {
            // Extract session id from cookies
            let Some(cookie) = request.headers().get("cookie") else {
                return unauthorized_response("missing cookies");
            };
            let Some(session_id) = extract_session_cookie(cookie) else {
                return unauthorized_response("missing session cookie");
            };

            // Validate the session and store its state in request extensions
            match validator.validate_session(session_id).await {
                Ok(state) => {
                    request.extensions_mut().insert(state);
                    inner.call(request).await
                }
                Err(err) => unauthorized_response(&err.to_string()),
            }
        })
    }
}

fn unauthorized_response<S: Into<String>, E>(message: S) -> Result<Response<Body>, E> {
    let body = serde_json::json!({ "error": message.into() }).to_string();
    Ok(Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap())
}

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// Error for validate_session
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidateSessionErr {
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("internal error")]
    Internal,
}
