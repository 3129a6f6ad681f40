//! Constants shared across restutils crates.

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Environment variable holding the cache expiry in milliseconds.
/// Unset means entries never expire.
pub const ENV_CACHE_EXPIRY_MS: &str = "RESTUTILS_CACHE_EXPIRY_MS";

/// Environment variable holding the initial cache capacity.
pub const ENV_CACHE_CAPACITY: &str = "RESTUTILS_CACHE_CAPACITY";

/// Initial capacity used when none is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 0;

// ═══════════════════════════════════════════════════════════════════════════════
// HOST VALIDATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length of a single domain label.
pub const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Minimum length of a top-level domain.
pub const MIN_TLD_LEN: usize = 2;

/// Maximum length of a top-level domain.
pub const MAX_TLD_LEN: usize = 6;
