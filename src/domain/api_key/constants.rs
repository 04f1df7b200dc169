//! Constants table backing the API key configuration

#[cfg(test)]
use mockall::automock;

/// Built-in key prefix
pub const PREFIX: &str = "ak_";

/// Built-in expiry window, in days
pub const EXPIRY_DAYS: i64 = 30;

/// Constant names, used in error reports
pub const PREFIX_NAME: &str = "PREFIX";
pub const EXPIRY_DAYS_NAME: &str = "EXPIRY_DAYS";

/// Source of the raw API key constants
///
/// `None` means the table has no entry for the constant. Values are returned
/// raw; range checks belong to the configuration record.
#[cfg_attr(test, automock)]
pub trait ApiKeyConstants: Send + Sync {
    /// Raw `PREFIX` entry
    fn prefix(&self) -> Option<String>;

    /// Raw `EXPIRY_DAYS` entry
    fn expiry_days(&self) -> Option<i64>;
}

/// Compile-time constants table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConstants;

impl ApiKeyConstants for BuiltinConstants {
    fn prefix(&self) -> Option<String> {
        Some(PREFIX.to_string())
    }

    fn expiry_days(&self) -> Option<i64> {
        Some(EXPIRY_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_constants() {
        let constants = BuiltinConstants;

        assert_eq!(constants.prefix().as_deref(), Some("ak_"));
        assert_eq!(constants.expiry_days(), Some(30));
    }

    #[test]
    fn test_builtin_constants_are_stable() {
        let constants = BuiltinConstants;

        assert_eq!(constants.prefix(), constants.prefix());
        assert_eq!(constants.expiry_days(), constants.expiry_days());
    }
}
