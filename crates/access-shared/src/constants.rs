//! Application-wide constants

pub const DEFAULT_AUTH_PREFIX: &str = "/auth";
pub const DEFAULT_REDIRECT: &str = "/dashboard";
pub const DEFAULT_PUBLIC_PATHS: &[&str] = &["/", "/dashboard", "/pos"];

/// Module key under which point-of-sale buttons are granted
pub const POS_MODULE_KEY: &str = "pos";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const ENV_PREFIX: &str = "ACCESS";
pub const ENV_SELECTOR: &str = "ACCESS_ENV";
