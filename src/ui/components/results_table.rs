use dioxus::prelude::*;

use super::roi_badge::RoiBadge;
use crate::domain::{PortfolioRow, RankedSkin};
use crate::ui::theme;
use crate::util::format::{currency, plain};

#[component]
pub fn ResultsTable(rows: Vec<PortfolioRow>, symbol: String) -> Element {
    let is_empty = rows.is_empty();
    let rendered = rows
        .into_iter()
        .enumerate()
        .map(|(position, row)| (position + 1, row))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "table-wrap",
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { "Skin" }
                        th { class: "num", "Skin Num" }
                        th { class: "num", "Buy Price" }
                        th { class: "num", "Sell Price" }
                        th { class: "num", "Fee %" }
                        th { class: "num", "Net Received" }
                        th { class: "num", "Profit" }
                        th { class: "num", "ROI %" }
                        th { class: "num", "Cumulative Money" }
                    }
                }
                tbody {
                    for (position, row) in rendered {
                        tr {
                            td { class: "muted", "{position}" }
                            td { "{row.skin.name}" }
                            td { class: "num", "{row.skin.index}" }
                            td { class: "num", {currency(&symbol, row.skin.buy_price)} }
                            td { class: "num", {currency(&symbol, row.skin.sell_price_adj)} }
                            td { class: "num", {plain(row.skin.fee_adj)} }
                            td { class: "num", {currency(&symbol, row.skin.net_received)} }
                            td { class: "num {theme::tone_class(row.skin.profit)}", {currency(&symbol, row.skin.profit)} }
                            td { class: "num", RoiBadge { value: row.skin.roi } }
                            td { class: "num", {currency(&symbol, row.cumulative_money)} }
                        }
                    }
                    if is_empty {
                        tr {
                            td { class: "muted", colspan: "10", "No skins to show." }
                        }
                    }
                }
            }
        }
    }
}

/// Profit-ordered view that keeps each skin's own `#`.
#[component]
pub fn RankingTable(entries: Vec<RankedSkin>, symbol: String) -> Element {
    let ranked = entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| (position + 1, entry))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "table-wrap",
            table { class: "data",
                thead {
                    tr {
                        th { "Rank" }
                        th { "#" }
                        th { "Skin" }
                        th { class: "num", "Profit" }
                        th { class: "num", "ROI %" }
                    }
                }
                tbody {
                    for (rank, entry) in ranked {
                        tr {
                            td { "{rank}" }
                            td { class: "muted", "{entry.index}" }
                            td { "{entry.name}" }
                            td { class: "num {theme::tone_class(entry.profit)}", {currency(&symbol, entry.profit)} }
                            td { class: "num", RoiBadge { value: entry.roi } }
                        }
                    }
                }
            }
        }
    }
}
