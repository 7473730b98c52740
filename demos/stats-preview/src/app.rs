use carranza_charts::{
    Palette, ProportionChart, SeriesColors, SeriesKeys, Slice, StackedMagnitudeChart, StackedRecord,
};
use dioxus::prelude::*;

/// Sample aggregates shaped like what the workshop backend reports: request
/// counts by status, and monthly request counts by type.
fn status_slices() -> Vec<Slice> {
    [
        ("Pendiente", 14.0),
        ("En proceso", 6.0),
        ("Atendida", 32.0),
        ("Cancelada", 3.0),
    ]
    .into_iter()
    .filter_map(|(name, value)| Slice::new(name, value).ok())
    .collect()
}

fn monthly_records() -> Vec<StackedRecord> {
    let rows = [
        ("ENE", 4.0, 2.0, 6.0),
        ("FEB", 7.0, 3.0, 4.0),
        ("MAR", 5.0, 6.0, 8.0),
        ("ABR", 9.0, 4.0, 3.0),
        ("MAY", 6.0, 5.0, 7.0),
        ("JUN", 8.0, 2.0, 5.0),
    ];
    rows.into_iter()
        .filter_map(|(name, cita, cotizacion, consulta)| {
            StackedRecord::new(name)
                .with_value("cita", cita)
                .and_then(|r| r.with_value("cotizacion", cotizacion))
                .and_then(|r| r.with_value("consulta", consulta))
                .ok()
        })
        .collect()
}

/// Root component: header plus the two dashboard charts over sample data.
#[component]
pub fn App() -> Element {
    let keys = SeriesKeys::new(["cita", "cotizacion", "consulta"]);
    let colors = SeriesColors::new([
        ("cita", "rgba(0, 212, 170, 0.75)"),
        ("cotizacion", "rgba(245, 158, 11, 0.75)"),
        ("consulta", "rgba(0, 217, 255, 0.75)"),
    ]);

    rsx! {
        div { class: "dashboard",
            div { class: "header",
                h1 { "Motosport Carranza — Workshop Stats" }
            }

            div { class: "chart-grid",
                ProportionChart {
                    data: status_slices(),
                    title: "Requests by status".to_string(),
                    palette: Palette::default(),
                }

                StackedMagnitudeChart {
                    data: monthly_records(),
                    keys: keys,
                    colors: colors,
                    title: "Monthly requests by type".to_string(),
                }
            }
        }
    }
}
