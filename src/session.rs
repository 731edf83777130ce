// ABOUTME: Session boundary turning a signed bearer token into a typed client identity
// ABOUTME: HS256 verification, expiry with leeway, and numeric subject parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Management
//!
//! A [`Session`] is obtained once at login and handed to every operation that
//! talks to the stores. Nothing downstream parses tokens: the engine only ever
//! sees a [`ClientIdentity`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Role carried by a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Client following a program
    Client,
    /// Coach authoring programs
    Coach,
}

impl Role {
    /// Claim value of the role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Coach => "coach",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "coach" => Ok(Self::Coach),
            other => Err(AppError::auth_malformed(format!("Unknown role '{other}'"))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verified identity of the person using the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// User identifier from the token subject
    pub client_id: i64,
    /// Role from the token
    pub role: Role,
}

/// Claims of a session token as issued by the auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User identifier as a decimal string
    pub sub: String,
    /// "client" or "coach"
    pub role: String,
    /// Expiry as a Unix timestamp
    pub exp: i64,
}

impl SessionClaims {
    /// Typed identity of the claims
    ///
    /// # Errors
    ///
    /// Returns `AuthMalformed` when the subject is not numeric or the role is unknown.
    pub fn identity(&self) -> AppResult<ClientIdentity> {
        let client_id = self.sub.trim().parse::<i64>().map_err(|_| {
            AppError::auth_malformed(format!("Token subject '{}' is not a user id", self.sub))
        })?;
        Ok(ClientIdentity {
            client_id,
            role: self.role.parse()?,
        })
    }
}

/// An authenticated session, valid until its token expires
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    identity: ClientIdentity,
    token: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Identity the session acts for
    #[must_use]
    pub const fn identity(&self) -> ClientIdentity {
        self.identity
    }

    /// Client identifier of the session
    #[must_use]
    pub const fn client_id(&self) -> i64 {
        self.identity.client_id
    }

    /// When the underlying token expires
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token has expired at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Value of the `Authorization` header for store requests
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Verifies session tokens and issues them for local tooling
#[derive(Clone)]
pub struct SessionManager {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    validation: Validation,
}

impl SessionManager {
    /// Manager verifying HS256 tokens signed with the configured secret
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verify a bearer token and open a session
    ///
    /// A leading `Bearer ` prefix is accepted.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` for an empty token, `AuthExpired` for an expired
    /// one, `AuthMalformed` for undecodable tokens or claims, and `AuthInvalid`
    /// for a bad signature.
    pub fn login(&self, token: &str) -> AppResult<Session> {
        let token = token.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        if token.is_empty() {
            return Err(AppError::auth_required());
        }

        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| Self::convert_jwt_error(&e))?;
        let identity = data.claims.identity()?;
        let expires_at = DateTime::from_timestamp(data.claims.exp, 0)
            .ok_or_else(|| AppError::auth_malformed("Token expiry is out of range"))?;

        AppLogger::log_session_event(Some(identity.client_id), "login", true);
        Ok(Session {
            identity,
            token: token.to_owned(),
            expires_at,
        })
    }

    /// Session for an optional token; any failure means no identity
    #[must_use]
    pub fn resolve(&self, token: Option<&str>) -> Option<Session> {
        let token = token?;
        match self.login(token) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(code = ?e.code, "No client identity resolved: {}", e.message);
                AppLogger::log_session_event(None, "login", false);
                None
            }
        }
    }

    /// End a session
    pub fn logout(&self, session: Session) {
        AppLogger::log_session_event(Some(session.client_id()), "logout", true);
        drop(session);
    }

    /// Sign a token the way the auth service does
    ///
    /// # Errors
    ///
    /// Returns an internal error if signing fails.
    pub fn issue_token(&self, identity: ClientIdentity, lifetime: Duration) -> AppResult<String> {
        let claims = SessionClaims {
            sub: identity.client_id.to_string(),
            role: identity.role.as_str().to_owned(),
            exp: (Utc::now() + lifetime).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")).with_source(e))
    }

    /// Map verification failures onto authentication error codes
    fn convert_jwt_error(e: &JwtError) -> AppError {
        debug!("Session token rejected: {e:?}");
        match e.kind() {
            ErrorKind::ExpiredSignature => AppError::auth_expired(),
            ErrorKind::InvalidSignature => {
                AppError::auth_invalid("Token signature verification failed")
            }
            ErrorKind::InvalidToken => AppError::auth_malformed("Token format is invalid"),
            ErrorKind::Base64(base64_err) => {
                AppError::auth_malformed(format!("Token contains invalid base64: {base64_err}"))
            }
            ErrorKind::Json(json_err) => {
                AppError::auth_malformed(format!("Token contains invalid JSON: {json_err}"))
            }
            ErrorKind::Utf8(utf8_err) => {
                AppError::auth_malformed(format!("Token contains invalid UTF-8: {utf8_err}"))
            }
            ErrorKind::MissingRequiredClaim(claim) => {
                AppError::auth_malformed(format!("Token is missing the '{claim}' claim"))
            }
            _ => AppError::auth_invalid(format!("Token validation failed: {e}")),
        }
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("algorithm", &Algorithm::HS256)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
