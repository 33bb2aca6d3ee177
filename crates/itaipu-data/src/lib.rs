#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltaic-energia/itaipu/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod loader;
pub mod raw;
pub mod records;

pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use loader::DataDirectory;
pub use raw::{FromRaw, RawRow, normalize};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
