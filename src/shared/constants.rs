// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - may create, update and delete catalog records
pub const ROLE_ADMIN: &str = "admin";
