#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltaic-energia/itaipu/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dashboard;
pub mod datasets;

// Re-export the sub-crates under short names
pub use itaipu_data as data;
pub use itaipu_output as output;
pub use itaipu_risk as risk;
pub use itaipu_series as series;

pub use datasets::Datasets;

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
