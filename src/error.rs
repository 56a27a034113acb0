//! Error types for bookshelf-web
//!
//! Storage misses and unmatched navigation are not errors; only startup
//! wiring and programmatic route lookups can fail.

use thiserror::Error;

/// Application error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No window or document (not running in a browser)
    #[error("no browser document available")]
    NoDocument,

    /// Mount element not found in the host page
    #[error("mount point '#{0}' not found")]
    MountPointMissing(String),

    /// Mount element exists but is not an HTML element
    #[error("mount point '#{0}' is not an HTML element")]
    MountPointNotHtml(String),

    /// Route name not present in the route table
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A path parameter required by the route was not supplied
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam {
        /// Route name
        route: String,
        /// Parameter name
        param: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::MountPointMissing("app".to_string()).to_string(),
            "mount point '#app' not found"
        );
        assert_eq!(
            Error::MissingParam {
                route: "Book".to_string(),
                param: "id".to_string(),
            }
            .to_string(),
            "route 'Book' requires parameter 'id'"
        );
    }
}
