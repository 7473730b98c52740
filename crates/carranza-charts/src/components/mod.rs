//! The chart components themselves.
//!
//! Both render directly as SVG/flex markup within Dioxus RSX from the pure
//! layouts in [`crate::geometry`], using CSS variables for theming. They are
//! driven entirely by props and recompute everything on every render.

pub mod proportion;
pub mod stacked;

pub use proportion::ProportionChart;
pub use stacked::StackedMagnitudeChart;
