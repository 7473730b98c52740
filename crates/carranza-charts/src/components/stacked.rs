use dioxus::prelude::*;

use crate::data::{SeriesKeys, StackedRecord};
use crate::format::{capitalize_first, format_value};
use crate::geometry::stacked_layout;
use crate::palette::SeriesColors;
use crate::tooltip::{TOOLTIP_OFFSET_PX, TooltipContent, TooltipState};

/// Stacked vertical bars with a pointer-following tooltip.
///
/// One bar per record, left to right in input order, scaled against the
/// largest record total. Bands stack bottom-to-top in key order. Hovering a
/// bar shows a floating panel with the record's per-key values and total;
/// the panel ignores pointer events so it can never block the leave.
#[component]
pub fn StackedMagnitudeChart(
    /// Records in display order.
    data: Vec<StackedRecord>,
    /// Series keys: stacking order and legend order.
    keys: SeriesKeys,
    /// Key to display color mapping.
    colors: SeriesColors,
    /// Panel heading.
    title: String,
    /// Chart area height in pixels.
    #[props(default = 180)]
    height: u32,
) -> Element {
    let mut tooltip = use_signal(TooltipState::default);

    if data.is_empty() {
        tracing::debug!(title = %title, "stacked chart has nothing to draw");
        return rsx! {
            div { class: "chart-card chart-empty",
                h3 { class: "chart-title", "{title}" }
                p { class: "chart-empty-message", "No data" }
            }
        };
    }

    let layout = stacked_layout(&data, &keys);

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{title}" }

            div {
                class: "stacked-bars",
                style: "display: flex; align-items: flex-end; gap: 10px; height: {height}px;",

                for bar in layout.bars.iter() {
                    {
                        let content = TooltipContent {
                            title: bar.name.clone(),
                            rows: bar
                                .segments
                                .iter()
                                .map(|seg| (capitalize_first(&seg.key), seg.value))
                                .collect(),
                            total: bar.total,
                        };
                        rsx! {
                            div {
                                class: "stacked-bar-column",
                                style: "flex: 1; height: 100%; display: flex; flex-direction: column; justify-content: flex-end;",
                                onmouseenter: move |e| {
                                    let p = e.data().client_coordinates();
                                    tooltip.write().enter(content.clone(), p.x, p.y);
                                },
                                onmousemove: move |e| {
                                    let p = e.data().client_coordinates();
                                    tooltip.write().move_to(p.x, p.y);
                                },
                                onmouseleave: move |_| tooltip.write().leave(),

                                div {
                                    class: "stacked-bar",
                                    style: "height: {bar.height_frac * 100.0}%; display: flex; flex-direction: column-reverse;",
                                    for segment in bar.segments.iter() {
                                        div {
                                            class: "stacked-segment",
                                            style: "height: {segment.frac_of_bar * 100.0}%; background: {colors.color_for(&segment.key)};",
                                        }
                                    }
                                }
                                div { class: "stacked-bar-label", "{bar.name}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "chart-legend stacked-legend",
                style: "display: flex; gap: 16px; margin-top: 12px;",
                for key in keys.iter() {
                    span {
                        class: "legend-row",
                        style: "display: flex; align-items: center; gap: 8px;",
                        span {
                            class: "legend-swatch",
                            style: "background: {colors.color_for(key)};",
                        }
                        span { class: "legend-label", "{capitalize_first(key)}" }
                    }
                }
            }

            if let TooltipState::Visible { content, x, y } = tooltip() {
                div {
                    class: "chart-tooltip",
                    style: "position: fixed; left: {x + TOOLTIP_OFFSET_PX}px; top: {y + TOOLTIP_OFFSET_PX}px; pointer-events: none;",

                    div { class: "tooltip-title", "{content.title}" }
                    for (label, value) in content.rows.iter() {
                        div {
                            class: "tooltip-row",
                            span { "{label}" }
                            span { class: "tooltip-value", "{format_value(*value)}" }
                        }
                    }
                    div {
                        class: "tooltip-row tooltip-total",
                        span { "Total" }
                        span { class: "tooltip-value", "{format_value(content.total)}" }
                    }
                }
            }
        }
    }
}
