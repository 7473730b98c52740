use dioxus::prelude::*;

use crate::data::Slice;
use crate::format::format_value;
use crate::geometry::{arc_path, pie_layout};
use crate::palette::Palette;

/// Pie chart of named magnitudes with a value legend.
///
/// Slices are drawn in input order, starting at 12 o'clock and proceeding
/// clockwise, each sized by its share of the total. Empty or zero-total data
/// renders a placeholder panel instead.
#[component]
pub fn ProportionChart(
    /// Slices in display order.
    data: Vec<Slice>,
    /// Panel heading.
    title: String,
    /// Segment colors, assigned by slice index.
    #[props(default)]
    palette: Palette,
    /// Diagram diameter in pixels.
    #[props(default = 180)]
    size: u32,
) -> Element {
    let values: Vec<f64> = data.iter().map(|slice| slice.value()).collect();

    let Some(segments) = pie_layout(&values) else {
        tracing::debug!(title = %title, "proportion chart has nothing to draw");
        return rsx! {
            div { class: "chart-card chart-empty",
                h3 { class: "chart-title", "{title}" }
                p { class: "chart-empty-message", "No data" }
            }
        };
    };

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{title}" }

            div {
                class: "proportion-body",
                style: "display: flex; align-items: center; gap: 20px;",

                svg {
                    width: "{size}",
                    height: "{size}",
                    view_box: "-1.1 -1.1 2.2 2.2",
                    role: "img",
                    "aria-label": "{title}",

                    for (i, (slice, segment)) in data.iter().zip(segments.iter()).enumerate() {
                        path {
                            d: arc_path(segment, 0.0, 0.0, 1.0),
                            fill: palette.color(i).to_string(),
                            stroke: "var(--bg-card)",
                            stroke_width: "0.015",
                            "aria-label": "{slice.name()}: {format_value(slice.value())}",
                        }
                    }
                }

                ul { class: "chart-legend",
                    for (i, slice) in data.iter().enumerate() {
                        li {
                            class: "legend-row",
                            style: "display: flex; align-items: center; gap: 8px;",
                            span {
                                class: "legend-swatch",
                                style: "background: {palette.color(i)};",
                            }
                            span { class: "legend-label", "{slice.name()}" }
                            span { class: "legend-value", "{format_value(slice.value())}" }
                        }
                    }
                }
            }
        }
    }
}
