//! Environment variable parsing helpers shared by pool and service configuration.

use std::str::FromStr;

/// Parse an environment variable, falling back to `default` when it is
/// missing or does not parse.
///
/// ```ignore
/// let port: u16 = parse_env_with_default("SERVER_PORT", 4000);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    parse_env_optional(key).unwrap_or(default)
}

/// Parse an environment variable, returning `None` if missing or invalid.
pub fn parse_env_optional<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read a string variable, treating blank values as unset.
pub fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a string variable with a default for missing or blank values.
pub fn env_or(key: &str, default: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_with_default() {
        let result: u32 = parse_env_with_default("NONEXISTENT_VAR_XYZ", 42);
        assert_eq!(result, 42);

        std::env::set_var("DB_POOL_TEST_PORT", " 8080 ");
        let result: u16 = parse_env_with_default("DB_POOL_TEST_PORT", 3000);
        assert_eq!(result, 8080);
        std::env::remove_var("DB_POOL_TEST_PORT");
    }

    #[test]
    fn test_parse_env_optional_rejects_garbage() {
        std::env::set_var("DB_POOL_TEST_OPT", "twelve");
        assert_eq!(parse_env_optional::<u32>("DB_POOL_TEST_OPT"), None);
        std::env::remove_var("DB_POOL_TEST_OPT");
    }

    #[test]
    fn test_env_or_treats_blank_as_missing() {
        std::env::set_var("DB_POOL_TEST_HOST", "   ");
        assert_eq!(env_or("DB_POOL_TEST_HOST", "database"), "database");

        std::env::set_var("DB_POOL_TEST_HOST", "db.internal");
        assert_eq!(env_or("DB_POOL_TEST_HOST", "database"), "db.internal");
        std::env::remove_var("DB_POOL_TEST_HOST");
    }
}
