//! Bearer-token authentication
//!
//! Tokens are opaque credentials. An [`AuthProvider`] decides whether a
//! presented token is acceptable and which caller it identifies; the server
//! runs it before any category handler.

use crate::core::error::RequestError;
use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use std::collections::HashSet;

/// Authentication context attached to an admitted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// Caller presented an accepted bearer token
    Token { token_id: String },

    /// No authentication performed (development mode)
    Anonymous,
}

impl AuthContext {
    /// Short caller label safe to write to logs
    pub fn principal(&self) -> &str {
        match self {
            AuthContext::Token { token_id } => token_id,
            AuthContext::Anonymous => "anonymous",
        }
    }
}

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Admit or reject a request based on its headers
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, RequestError>;
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, RequestError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Authentication required"))?
        .to_str()
        .map_err(|_| unauthorized("Invalid authorization header format"))?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or_else(|| unauthorized("Invalid authorization header format"))?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(unauthorized("Invalid authorization header format"));
    }

    Ok(token)
}

fn unauthorized(message: &str) -> RequestError {
    RequestError::Unauthorized {
        message: message.to_string(),
    }
}

/// Accepts a fixed set of tokens
pub struct StaticTokenProvider {
    tokens: HashSet<String>,
}

impl StaticTokenProvider {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl AuthProvider for StaticTokenProvider {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, RequestError> {
        let token = bearer_token(headers)?;
        if !self.tokens.contains(token) {
            return Err(unauthorized("Invalid or expired token"));
        }

        // Only a short prefix ever reaches the logs.
        let token_id: String = token.chars().take(6).collect();
        Ok(AuthContext::Token { token_id })
    }
}

/// Default no-auth provider (for development)
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn authenticate(&self, _headers: &HeaderMap) -> Result<AuthContext, RequestError> {
        Ok(AuthContext::Anonymous)
    }
}
