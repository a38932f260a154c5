//! Kernel Density Estimation over the search box.
//!
//! The TPE optimizer models the "good" and "bad" regions of the history with
//! these estimators.
//!
//! - [`KernelDensityModel`] - diagonal-bandwidth Gaussian KDE with log-domain
//!   density evaluation and clamped sampling
//! - [`BandwidthRule`] - data-driven default bandwidths

mod bandwidth;
mod model;

pub use bandwidth::{
    BandwidthRule, MIN_BANDWIDTH_FRACTION, range_scaled_bandwidth, robust_bandwidth,
};
pub use model::{DENSITY_FLOOR, KernelDensityModel};
