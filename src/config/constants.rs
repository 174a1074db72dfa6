//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (single SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://blogproject.db?mode=rwc";

/// Default connection pool size. SQLite permits one writer at a time.
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 1;
