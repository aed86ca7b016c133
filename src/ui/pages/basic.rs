use dioxus::prelude::*;

use crate::{
    app::export_rows,
    domain::{app_state::MAX_ITEMS, AppState, ChartKind, Portfolio},
    ui::{
        components::{
            chart::{BarChart, ChartDatum, LineChart},
            kpi_card::KpiCard,
            results_table::ResultsTable,
            skin_input::SkinInputRow,
            toast::ToastMessage,
        },
        theme,
    },
    util::{
        config::DashboardConfig,
        format::{currency, percent},
    },
};

#[component]
pub fn BasicPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<DashboardConfig>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let portfolio = state.with(|st| st.portfolio());
    let (item_count, chart_focus) = state.with(|st| (st.item_count(), st.chart_focus));
    let symbol = config.currency_symbol.clone();
    let totals = portfolio.totals;

    let input_rows: Vec<(usize, f64)> = portfolio
        .skins()
        .map(|skin| (skin.index, skin.buy_price))
        .collect();

    let shows = |kind: ChartKind| chart_focus.map_or(true, |focus| focus == kind);
    let (show_profit, show_roi, show_growth) = (
        shows(ChartKind::Profit),
        shows(ChartKind::Roi),
        shows(ChartKind::Growth),
    );
    let profit_data = profit_series(&portfolio);
    let roi_data = roi_series(&portfolio);
    let growth_data = growth_series(&portfolio);

    let on_export = {
        let rows = portfolio.rows.clone();
        let config = config.clone();
        move |_| export_rows(&rows, &config, toasts)
    };

    rsx! {
        div { class: "stack", style: "gap: 24px",
            section {
                h2 { class: "panel-title", "🏆 Total Summary" }
                div { class: "kpi-grid",
                    KpiCard {
                        title: "Total Invested".to_string(),
                        value: currency(&symbol, totals.total_invested),
                        description: None,
                    }
                    KpiCard {
                        title: "Total Money Received".to_string(),
                        value: currency(&symbol, totals.total_received),
                        description: Some("Net of marketplace fees".to_string()),
                    }
                    KpiCard {
                        title: "Total Profit".to_string(),
                        value: currency(&symbol, totals.total_profit),
                        description: None,
                        tone: theme::tone_class(totals.total_profit),
                    }
                    KpiCard {
                        title: "Total ROI".to_string(),
                        value: percent(totals.total_roi),
                        description: None,
                        tone: theme::tone_class(totals.total_roi),
                    }
                }
            }

            section { class: "two-col",
                div { class: "stack",
                    div { class: "field",
                        label { class: "field-label", "Enter number of skins:" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "1",
                            max: "{MAX_ITEMS}",
                            step: "1",
                            value: item_count.to_string(),
                            onchange: move |evt: FormEvent| {
                                if let Ok(count) = evt.value().trim().parse::<usize>() {
                                    state.with_mut(|st| st.set_item_count(count));
                                }
                            },
                        }
                    }
                    for (index, effective_buy) in input_rows {
                        SkinInputRow { key: "{index}", index, effective_buy }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| state.with_mut(|st| st.reset_inputs()),
                        "Reset Inputs"
                    }
                }

                div { class: "stack",
                    div { class: "row", style: "justify-content: space-between",
                        h2 { class: "panel-title", style: "margin: 0", "📊 Individual Skin Results" }
                        button { class: "btn btn-primary", onclick: on_export, "Export CSV" }
                    }
                    ResultsTable { rows: portfolio.rows.clone(), symbol: symbol.clone() }
                    div { class: "chart-grid",
                        if show_profit {
                            BarChart { title: "Profit per Skin".to_string(), y_label: "Profit".to_string(), data: profit_data }
                        }
                        if show_roi {
                            LineChart { title: "ROI % per Skin".to_string(), y_label: "ROI %".to_string(), data: roi_data, color: theme::ROI_LINE }
                        }
                        if show_growth {
                            LineChart { title: "Portfolio Growth Over Time".to_string(), y_label: "Cumulative Money".to_string(), data: growth_data, color: theme::GROWTH_LINE }
                        }
                    }
                }
            }
        }
    }
}

fn profit_series(portfolio: &Portfolio) -> Vec<ChartDatum> {
    portfolio
        .skins()
        .map(|skin| ChartDatum {
            label: skin.name.clone(),
            value: skin.profit,
            color: theme::profit_color(skin.profit),
        })
        .collect()
}

fn roi_series(portfolio: &Portfolio) -> Vec<ChartDatum> {
    portfolio
        .skins()
        .map(|skin| ChartDatum {
            label: skin.index.to_string(),
            value: skin.roi,
            color: theme::ROI_LINE,
        })
        .collect()
}

fn growth_series(portfolio: &Portfolio) -> Vec<ChartDatum> {
    portfolio
        .rows
        .iter()
        .map(|row| ChartDatum {
            label: row.skin.index.to_string(),
            value: row.cumulative_money,
            color: theme::GROWTH_LINE,
        })
        .collect()
}
