//! Price and indicator series

pub mod bar;
pub mod series;

pub use bar::{Bar, OhlcvSeries};
pub use series::IndicatorSeries;
