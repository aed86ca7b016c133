use dioxus::prelude::*;

use crate::{
    app::export_rows,
    domain::{
        analysis::{
            blank_row, cumulative_roi, editable_rows, profit_histogram, rank_by_profit,
            recompute_edited, PROFIT_HISTOGRAM_BINS,
        },
        AppState, EditableRow, HistogramBin, Portfolio, Scenario,
    },
    ui::{
        components::{
            chart::{BarChart, ChartDatum, LineChart, ScatterChart, ScatterDatum},
            editable_grid::EditableGrid,
            results_table::RankingTable,
            toast::ToastMessage,
        },
        theme,
    },
    util::{config::DashboardConfig, generate_id},
};

fn seed_rows(scenario: &Scenario) -> Vec<EditableRow> {
    editable_rows(&scenario.portfolio(), || generate_id("row"))
}

/// Editable copy of the dashboard results plus distribution charts. Edits
/// stay local to this page and are thrown away when the priced scenario
/// changes; display toggles leave them alone.
#[component]
pub fn AdvancedPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = use_context::<DashboardConfig>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let scenario = use_memo(move || state.read().scenario());
    let mut rows = use_signal(|| seed_rows(&scenario.read()));

    use_effect(move || {
        let seeded = seed_rows(&scenario.read());
        rows.set(seeded);
    });

    let current = rows();
    let computed = recompute_edited(&current);
    let symbol = config.currency_symbol.clone();

    let ranking = rank_by_profit(&computed.rows);
    let histogram = histogram_series(&computed);
    let cumulative = cumulative_roi_series(&computed);
    let scatter = scatter_series(&computed);

    let on_export = {
        let exported = computed.rows.clone();
        let config = config.clone();
        move |_| export_rows(&exported, &config, toasts)
    };

    rsx! {
        div { class: "stack", style: "gap: 24px",
            section { class: "stack",
                div { class: "row", style: "justify-content: space-between",
                    h2 { class: "panel-title", style: "margin: 0", "📊 Individual Skin Results (Editable)" }
                    div { class: "row",
                        button {
                            class: "btn",
                            onclick: move |_| rows.set(seed_rows(&scenario.read())),
                            "Reset to dashboard data"
                        }
                        button { class: "btn btn-primary", onclick: on_export, "Export CSV" }
                    }
                }
                p { class: "muted",
                    "Edit names, buy prices, sell prices and fees. Net received, profit, ROI and cumulative money are recalculated."
                }
                EditableGrid {
                    rows: current,
                    computed: computed.rows.clone(),
                    symbol: symbol.clone(),
                    on_edit: move |edited: EditableRow| {
                        rows.with_mut(|rs| {
                            if let Some(slot) = rs.iter_mut().find(|r| r.id == edited.id) {
                                *slot = edited;
                            }
                        });
                    },
                    on_remove: move |id: String| rows.with_mut(|rs| rs.retain(|r| r.id != id)),
                    on_add: move |_| {
                        let defaults = state.with(|st| st.row_defaults);
                        rows.with_mut(|rs| {
                            let added = blank_row(rs, generate_id("row"), &defaults);
                            rs.push(added);
                        });
                    },
                }
            }

            section { class: "stack",
                h2 { class: "panel-title", "🏅 Performance Ranking" }
                RankingTable { entries: ranking, symbol: symbol.clone() }
            }

            section { class: "stack",
                h2 { class: "panel-title", "📈 Additional Analysis" }
                div { class: "chart-grid",
                    BarChart { title: "Profit Distribution".to_string(), y_label: "Count".to_string(), data: histogram }
                    LineChart {
                        title: "Cumulative ROI Over Time".to_string(),
                        y_label: "Cumulative ROI %".to_string(),
                        data: cumulative,
                        color: theme::CUMULATIVE_ROI_LINE,
                    }
                    ScatterChart {
                        title: "ROI vs Profit Scatter Plot".to_string(),
                        x_label: "Profit".to_string(),
                        y_label: "ROI %".to_string(),
                        data: scatter,
                        color: theme::SCATTER_DOT,
                    }
                }
            }
        }
    }
}

fn bin_label(bin: &HistogramBin) -> String {
    format!("{:.0} to {:.0}", bin.start, bin.end)
}

fn histogram_series(portfolio: &Portfolio) -> Vec<ChartDatum> {
    let profits: Vec<f64> = portfolio.skins().map(|skin| skin.profit).collect();
    profit_histogram(&profits, PROFIT_HISTOGRAM_BINS)
        .iter()
        .map(|bin| ChartDatum {
            label: bin_label(bin),
            value: bin.count as f64,
            color: theme::HISTOGRAM_BAR,
        })
        .collect()
}

fn cumulative_roi_series(portfolio: &Portfolio) -> Vec<ChartDatum> {
    portfolio
        .skins()
        .zip(cumulative_roi(&portfolio.rows))
        .map(|(skin, value)| ChartDatum {
            label: skin.index.to_string(),
            value,
            color: theme::CUMULATIVE_ROI_LINE,
        })
        .collect()
}

fn scatter_series(portfolio: &Portfolio) -> Vec<ScatterDatum> {
    portfolio
        .skins()
        .map(|skin| ScatterDatum {
            x: skin.profit,
            y: skin.roi,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited(index: usize, buy: f64, sell: f64) -> EditableRow {
        EditableRow {
            id: format!("row-{index}"),
            index,
            name: format!("Skin {index}"),
            buy_price: buy,
            sell_price: sell,
            fee_pct: 0.0,
        }
    }

    #[test]
    fn histogram_bars_use_bin_ranges() {
        let portfolio = recompute_edited(&[edited(1, 100.0, 90.0), edited(2, 100.0, 130.0)]);
        let bars = histogram_series(&portfolio);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "-10 to 10");
        assert_eq!(bars.iter().map(|b| b.value).sum::<f64>(), 2.0);
    }

    #[test]
    fn analysis_series_track_rows() {
        let portfolio = recompute_edited(&[edited(3, 100.0, 110.0), edited(7, 100.0, 120.0)]);

        let cumulative = cumulative_roi_series(&portfolio);
        assert_eq!(cumulative[1].label, "7");
        assert!((cumulative[1].value - 30.0).abs() < 1e-9);

        let scatter = scatter_series(&portfolio);
        assert!((scatter[0].x - 10.0).abs() < 1e-9);
        assert!((scatter[1].y - 20.0).abs() < 1e-9);
    }
}
