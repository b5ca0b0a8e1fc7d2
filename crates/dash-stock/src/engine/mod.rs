//! Fetch-compute pipeline
//!
//! [`IndicatorSet`] runs the Indicator Engine over one series,
//! [`compute_pass`] turns fetched series into a [`RenderModel`] without any
//! I/O, and [`Dashboard`] wires a [`MarketDataSource`] in front of both.
//!
//! [`RenderModel`]: crate::render::RenderModel
//! [`MarketDataSource`]: crate::api::MarketDataSource

pub mod dashboard;
pub mod indicator_set;
pub mod pass;

pub use dashboard::Dashboard;
pub use indicator_set::{IndicatorSet, MovingAverage};
pub use pass::compute_pass;
