//! Domain-level constants.
//!
//! These constants define business rules and the messages surfaced when
//! they are violated.

// =============================================================================
// Roles
// =============================================================================

/// Role id of administrators
pub const ROLE_ADMIN_ID: i64 = 1;

/// Role id of advisors
pub const ROLE_ADVISOR_ID: i64 = 2;

/// Role id of clients
pub const ROLE_CLIENT_ID: i64 = 3;

/// Display name of the administrator role
pub const ROLE_ADMIN: &str = "ADMIN";

/// Display name of the advisor role
pub const ROLE_ADVISOR: &str = "ADVISOR";

/// Display name of the client role
pub const ROLE_CLIENT: &str = "CLIENT";

// =============================================================================
// Registration
// =============================================================================

/// Lowest accepted base salary (currency units)
pub const MIN_SALARY: i64 = 0;

/// Highest accepted base salary (currency units)
pub const MAX_SALARY: i64 = 15_000_000;

pub const SALARY_OUT_OF_RANGE: &str = "Salary must be between 0 and 15,000,000";

pub const DUPLICATE_IDENTITY_NUMBER: &str =
    "A user with this identification number already exists";

pub const DUPLICATE_EMAIL: &str = "A user with this email already exists";

/// Reported when the storage unique constraint catches a race the
/// application-level checks missed.
pub const DUPLICATE_USER: &str = "A user with this identification number or email already exists";

// =============================================================================
// Authentication
// =============================================================================

pub const LOGIN_USER_NOT_FOUND: &str = "Login failed, user not found";

pub const LOGIN_INVALID_CREDENTIALS: &str = "Login failed, invalid credentials";

/// Default session token lifetime in minutes
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 20;

/// Longest accepted session token lifetime (one week)
pub const MAX_JWT_EXPIRATION_MINUTES: i64 = 7 * 24 * 60;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per minute (for token expiration calculation)
pub const SECONDS_PER_MINUTE: i64 = 60;
