/**
 * Origin Admission Middleware
 *
 * Decides whether a browser origin may call the API and attaches the CORS
 * response headers. Runs first on every request.
 *
 * - `OPTIONS` requests are answered here with `200` and an empty body; no
 *   route handler ever sees them.
 * - Requests without an `Origin` header (curl, server-to-server) are admitted.
 * - Requests whose `Origin` is not in the policy are still served, but the
 *   response carries no `Access-Control-Allow-*` headers, so the browser
 *   discards it. The server never raises an error for a denied origin.
 * - With credentials enabled the exact origin is echoed, never `*`.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Origin served by the production frontend
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://jointhewaitlist.netlify.app";

/// Which origins may call the API. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPolicy {
    SingleOrigin(String),
    AllowList(BTreeSet<String>),
}

impl OriginPolicy {
    pub fn permits(&self, origin: &str) -> bool {
        match self {
            Self::SingleOrigin(allowed) => allowed == origin,
            Self::AllowList(allowed) => allowed.contains(origin),
        }
    }
}

/// Outcome of the origin check for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// Attach CORS headers. `origin` is the value to echo, if the request had one.
    Allow {
        origin: Option<HeaderValue>,
        allow_credentials: bool,
    },
    /// Attach nothing
    Deny,
}

/// CORS settings shared by every route
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origins: OriginPolicy,
    pub allow_credentials: bool,
    pub allow_methods: Vec<Method>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: OriginPolicy::SingleOrigin(DEFAULT_ALLOWED_ORIGIN.to_string()),
            allow_credentials: true,
            allow_methods: vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS],
        }
    }
}

impl CorsConfig {
    /// Decide whether the request's origin is admitted
    pub fn check_origin(&self, headers: &HeaderMap) -> AdmissionDecision {
        let Some(origin) = headers.get(header::ORIGIN) else {
            return AdmissionDecision::Allow {
                origin: None,
                allow_credentials: self.allow_credentials,
            };
        };

        match origin.to_str() {
            Ok(value) if self.origins.permits(value) => AdmissionDecision::Allow {
                origin: Some(origin.clone()),
                allow_credentials: self.allow_credentials,
            },
            _ => {
                tracing::warn!("Origin not allowed: {:?}", origin);
                AdmissionDecision::Deny
            }
        }
    }

    /// Attach the response headers for a decision
    ///
    /// `Vary: Origin` goes on every response, denied ones included; the
    /// `Access-Control-Allow-*` headers only on allowed ones.
    pub fn apply(&self, decision: &AdmissionDecision, headers: &mut HeaderMap) {
        headers.append(header::VARY, HeaderValue::from_static("Origin"));

        let AdmissionDecision::Allow { origin, allow_credentials } = decision else {
            return;
        };

        if let Some(origin) = origin {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
            if *allow_credentials {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
            }
        }

        let methods = self
            .allow_methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if let Ok(methods) = HeaderValue::from_str(&methods) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        }
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        );
    }
}

/// Whether the request is a CORS preflight
pub fn is_preflight(method: &Method) -> bool {
    method == Method::OPTIONS
}

/// Origin admission middleware
///
/// Applied to the whole router, outside authentication.
pub async fn admit_origin(
    State(cors): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let decision = cors.check_origin(request.headers());

    let mut response = if is_preflight(request.method()) {
        tracing::debug!("Answering preflight for {}", request.uri().path());
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    cors.apply(&decision, response.headers_mut());
    response
}
