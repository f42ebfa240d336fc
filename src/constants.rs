/// Method selection codes
pub const CODE_GET: char = 'r';
pub const CODE_POST: char = 'c';
pub const CODE_PUT: char = 'u';
pub const CODE_DELETE: char = 'd';

/// Printed when `-m` selects nothing usable
pub const NO_VALID_METHODS_MESSAGE: &str =
    "No valid methods selected. Please use -m with 'c', 'r', 'u', or 'd'.";

/// Output line prefixes
pub const ENDPOINT_PREFIX: &str = "Endpoint: ";
pub const FAILURE_PREFIX: &str = "Failed to make";

/// Log filters used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "warn,crudder=debug";

/// Stripped from raw result messages; greedy up to the last colon
pub const REQUEST_TARGET_PATTERN: &str = r"request to .*:";
