use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ROLE_ADMIN;

/// Caller identity attached to the request after token validation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user has the administrator capability.
    ///
    /// This is the single predicate gating every mutating catalog operation;
    /// read operations never consult it.
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// Claims expected in a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_admin_role_grants_admin_capability() {
        assert!(user_with_roles(&["admin"]).is_admin());
        assert!(user_with_roles(&["customer", "admin"]).is_admin());
    }

    #[test]
    fn test_non_admin_roles_lack_admin_capability() {
        assert!(!user_with_roles(&[]).is_admin());
        assert!(!user_with_roles(&["customer"]).is_admin());
        // Role match is exact, not case-insensitive
        assert!(!user_with_roles(&["ADMIN"]).is_admin());
    }
}
