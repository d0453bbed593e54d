//! Mount geometry: board size and aperture placement for picture-framing mounts.
//!
//! All lengths are millimetres. [`compute`] is the whole calculator; the rest of
//! the crate is the data model around it (config, paper sizes, display units)
//! and the advisory overlay a host applies before recomputing.

pub mod advisory;
pub mod config;
pub mod error;
pub mod geometry;
pub mod paper;
pub mod types;
pub mod units;

pub use advisory::{
    Advisor, AdvisoryRequest, AdvisoryResponse, SuggestedConfig, parse_advisory_response,
    request_suggestion,
};
pub use config::MountConfig;
pub use error::{AdvisoryError, ConfigError};
pub use geometry::{BoardSource, MountGeometry, compute, compute_with_table};
pub use paper::{CUSTOM_PRESET, FALLBACK_BOARD, PAPER_SIZES, PaperSize, find_paper_size};
pub use types::{BorderConfig, Dimensions, MountMode, Orientation, Position};
pub use units::DisplayUnit;
