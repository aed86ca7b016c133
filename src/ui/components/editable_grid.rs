use dioxus::prelude::*;

use super::roi_badge::RoiBadge;
use crate::domain::{EditableRow, PortfolioRow};
use crate::ui::theme;
use crate::util::format::{currency, parse_number};

/// Data-editor style grid. Only name, buy price, sell price and fee are
/// editable; the remaining columns come from `computed` and are recalculated
/// by the caller after every edit.
#[component]
pub fn EditableGrid(
    rows: Vec<EditableRow>,
    computed: Vec<PortfolioRow>,
    symbol: String,
    on_edit: EventHandler<EditableRow>,
    on_remove: EventHandler<String>,
    on_add: EventHandler<()>,
) -> Element {
    let is_empty = rows.is_empty();
    let paired = rows.into_iter().zip(computed).collect::<Vec<_>>();

    rsx! {
        div { class: "stack",
            div { class: "table-wrap",
                table { class: "data",
                    thead {
                        tr {
                            th { "#" }
                            th { "Skin" }
                            th { class: "num", "Buy Price" }
                            th { class: "num", "Sell Price" }
                            th { class: "num", "Fee %" }
                            th { class: "num", "Net Received" }
                            th { class: "num", "Profit" }
                            th { class: "num", "ROI %" }
                            th { class: "num", "Cumulative Money" }
                            th {}
                        }
                    }
                    tbody {
                        for (row, result) in paired {
                            GridRow {
                                key: "{row.id}",
                                row,
                                result,
                                symbol: symbol.clone(),
                                on_edit,
                                on_remove,
                            }
                        }
                        if is_empty {
                            tr {
                                td { class: "muted", colspan: "10", "All rows removed. Add a row to continue." }
                            }
                        }
                    }
                }
            }
            div { class: "row",
                button { class: "btn", onclick: move |_| on_add.call(()), "+ Add Row" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct GridRowProps {
    row: EditableRow,
    result: PortfolioRow,
    symbol: String,
    on_edit: EventHandler<EditableRow>,
    on_remove: EventHandler<String>,
}

#[component]
fn GridRow(props: GridRowProps) -> Element {
    let row = props.row;
    let result = props.result;
    let symbol = props.symbol;
    let on_edit = props.on_edit;
    let remove_id = row.id.clone();

    let name_row = row.clone();
    let buy_row = row.clone();
    let sell_row = row.clone();
    let fee_row = row.clone();

    rsx! {
        tr {
            td { class: "muted", "{row.index}" }
            td {
                input {
                    class: "input-cell",
                    value: row.name.clone(),
                    onchange: move |evt: FormEvent| {
                        let mut edited = name_row.clone();
                        edited.name = evt.value();
                        on_edit.call(edited);
                    },
                }
            }
            td { class: "num",
                NumberCell {
                    value: row.buy_price,
                    on_change: move |value: f64| {
                        let mut edited = buy_row.clone();
                        edited.buy_price = value.max(0.0);
                        on_edit.call(edited);
                    },
                }
            }
            td { class: "num",
                NumberCell {
                    value: row.sell_price,
                    on_change: move |value: f64| {
                        let mut edited = sell_row.clone();
                        edited.sell_price = value.max(0.0);
                        on_edit.call(edited);
                    },
                }
            }
            td { class: "num",
                NumberCell {
                    value: row.fee_pct,
                    on_change: move |value: f64| {
                        let mut edited = fee_row.clone();
                        edited.fee_pct = value.clamp(0.0, 100.0);
                        on_edit.call(edited);
                    },
                }
            }
            td { class: "num", {currency(&symbol, result.skin.net_received)} }
            td { class: "num {theme::tone_class(result.skin.profit)}", {currency(&symbol, result.skin.profit)} }
            td { class: "num", RoiBadge { value: result.skin.roi } }
            td { class: "num", {currency(&symbol, result.cumulative_money)} }
            td {
                button {
                    class: "btn btn-danger",
                    onclick: move |_| props.on_remove.call(remove_id.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn NumberCell(value: f64, on_change: EventHandler<f64>) -> Element {
    rsx! {
        input {
            class: "input-cell",
            r#type: "number",
            step: "any",
            value: value.to_string(),
            onchange: move |evt: FormEvent| {
                if let Some(parsed) = parse_number(&evt.value()) {
                    on_change.call(parsed);
                }
            },
        }
    }
}
