//! Build-time configuration

/// Storage key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Id of the element the app mounts into
pub const MOUNT_ID: &str = "app";

/// Static application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Root path the router's browser history is anchored at
    pub base_path: &'static str,
    /// Id of the host page element to mount into
    pub mount_id: &'static str,
    /// Storage key of the theme preference
    pub theme_key: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: "/",
            mount_id: MOUNT_ID,
            theme_key: THEME_KEY,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    ///
    /// `BASE_URL` sets the router base path (default `/`).
    pub fn from_env() -> Self {
        Self {
            base_path: normalize_base(option_env!("BASE_URL").unwrap_or("/")),
            ..Self::default()
        }
    }
}

/// Strip surrounding whitespace and trailing `/` from a base path.
///
/// An empty result becomes the root `/`. A missing leading `/` is left to
/// the router, which resolves the base against the origin.
pub fn normalize_base(raw: &'static str) -> &'static str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("///"), "/");
        assert_eq!(normalize_base("/shelf/"), "/shelf");
        assert_eq!(normalize_base(" /apps/shelf/ "), "/apps/shelf");
        assert_eq!(normalize_base("shelf"), "shelf");
    }
}
