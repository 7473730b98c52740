//! Native chart components for the Motosport Carranza admin dashboard.
//!
//! Two renderers cover the dashboard's aggregate views: [`ProportionChart`]
//! turns named magnitudes into a pie diagram with a value legend, and
//! [`StackedMagnitudeChart`] turns per-bucket series values into stacked
//! vertical bars with a pointer-following tooltip. All proportion math lives
//! in [`geometry`] as pure functions; the components recompute it on every
//! render from their props and own nothing beyond transient hover state.

pub mod components;
pub mod data;
pub mod format;
pub mod geometry;
pub mod palette;
pub mod tooltip;

pub use components::{ProportionChart, StackedMagnitudeChart};
pub use data::{ChartDataError, SeriesKeys, Slice, StackedRecord};
pub use palette::{Palette, SeriesColors};
pub use tooltip::{TooltipContent, TooltipState};
