use std::time::Duration;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Validates bearer tokens against the shared HS256 secret.
///
/// The identity provider that mints tokens is an external collaborator; this
/// service only checks signature and expiry and extracts the caller's roles.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway.as_secs();

        Self {
            decoding_key,
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?;

        Ok(AuthenticatedUser {
            sub: token_data.claims.sub,
            roles: token_data.claims.roles,
        })
    }
}
