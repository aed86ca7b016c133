use super::app_state::RowDefaults;
use super::entities::{
    default_skin_name, EditableRow, HistogramBin, Modifiers, Portfolio, PortfolioRow, RankedSkin,
    SkinInput,
};
use super::pricing::{assemble_portfolio, price_item};

/// Upper bound on histogram bins for the profit distribution chart.
pub const PROFIT_HISTOGRAM_BINS: usize = 20;

/// Recomputes every derived column of the advanced grid from its editable
/// fields. The grid holds already adjusted prices, so no modifiers apply and
/// rows are priced independently.
pub fn recompute_edited(rows: &[EditableRow]) -> Portfolio {
    let neutral = Modifiers::default();
    let skins = rows
        .iter()
        .map(|row| {
            let input = SkinInput {
                index: row.index,
                name: row.name.clone(),
                buy_price: row.buy_price,
                sell_price_raw: row.sell_price,
                fee_raw: row.fee_pct,
            };
            price_item(&input, &neutral, None)
        })
        .collect();

    assemble_portfolio(skins)
}

/// Seeds editable grid rows from a computed portfolio.
pub fn editable_rows(portfolio: &Portfolio, mut next_id: impl FnMut() -> String) -> Vec<EditableRow> {
    portfolio
        .skins()
        .map(|skin| EditableRow {
            id: next_id(),
            index: skin.index,
            name: skin.name.clone(),
            buy_price: skin.buy_price,
            sell_price: skin.sell_price_adj,
            fee_pct: skin.fee_adj,
        })
        .collect()
}

/// New grid row numbered after the highest existing index.
pub fn blank_row(existing: &[EditableRow], id: String, defaults: &RowDefaults) -> EditableRow {
    let index = existing.iter().map(|row| row.index).max().unwrap_or(0) + 1;
    EditableRow {
        id,
        index,
        name: default_skin_name(index),
        buy_price: defaults.buy_price,
        sell_price: defaults.sell_price,
        fee_pct: defaults.fee_pct,
    }
}

/// Profit-descending ranking. Ties keep index order and every entry keeps the
/// index it was priced under.
pub fn rank_by_profit(rows: &[PortfolioRow]) -> Vec<RankedSkin> {
    let mut ranked: Vec<RankedSkin> = rows
        .iter()
        .map(|row| RankedSkin {
            index: row.skin.index,
            name: row.skin.name.clone(),
            profit: row.skin.profit,
            roi: row.skin.roi,
        })
        .collect();
    ranked.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    ranked
}

pub fn profit_histogram(values: &[f64], max_bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || max_bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max - min <= f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: finite.len(),
        }];
    }

    let bin_count = max_bins.min(finite.len());
    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for value in finite {
        let slot = (((value - min) / width) as usize).min(bin_count - 1);
        bins[slot].count += 1;
    }

    bins
}

/// Running sum of per-skin ROI percentages.
pub fn cumulative_roi(rows: &[PortfolioRow]) -> Vec<f64> {
    rows.iter()
        .scan(0.0, |running, row| {
            *running += row.skin.roi;
            Some(*running)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::build_portfolio;

    fn row(index: usize, buy: f64, sell: f64, fee: f64) -> EditableRow {
        EditableRow {
            id: format!("row-{index}"),
            index,
            name: format!("Skin {index}"),
            buy_price: buy,
            sell_price: sell,
            fee_pct: fee,
        }
    }

    #[test]
    fn edited_rows_are_recomputed_from_fields() {
        let portfolio = recompute_edited(&[row(1, 100.0, 150.0, 8.0), row(2, 50.0, 40.0, 0.0)]);

        let first = &portfolio.rows[0].skin;
        assert!((first.net_received - 138.0).abs() < 1e-9);
        assert!((first.profit - 38.0).abs() < 1e-9);
        assert!((portfolio.rows[1].cumulative_money - 128.0).abs() < 1e-9);
    }

    #[test]
    fn edited_rows_keep_clamping() {
        let portfolio = recompute_edited(&[row(1, 0.0, 100.0, 150.0), row(2, 10.0, 10.0, -5.0)]);

        assert_eq!(portfolio.rows[0].skin.net_received, 0.0);
        assert_eq!(portfolio.rows[0].skin.roi, 0.0);
        assert_eq!(portfolio.rows[1].skin.fee_adj, 0.0);
    }

    #[test]
    fn seeded_rows_reproduce_the_portfolio() {
        let items = vec![
            SkinInput::new(1, 100.0, 150.0, 8.0),
            SkinInput::new(2, 100.0, 180.0, 4.0),
        ];
        let portfolio = build_portfolio(&items, &Modifiers::new(10.0, 2.0), true);
        let mut counter = 0;
        let rows = editable_rows(&portfolio, || {
            counter += 1;
            format!("row-{counter}")
        });

        assert_eq!(rows[1].id, "row-2");
        let recomputed = recompute_edited(&rows);
        for (a, b) in recomputed.skins().zip(portfolio.skins()) {
            assert!((a.net_received - b.net_received).abs() < 1e-9);
            assert!((a.profit - b.profit).abs() < 1e-9);
        }
    }

    #[test]
    fn blank_row_takes_next_index() {
        let rows = vec![row(1, 1.0, 1.0, 0.0), row(4, 1.0, 1.0, 0.0)];
        let added = blank_row(&rows, "row-x".to_string(), &RowDefaults::default());

        assert_eq!(added.index, 5);
        assert_eq!(added.name, "Skin 5");
        assert_eq!(added.fee_pct, 8.0);
        assert_eq!(blank_row(&[], "a".to_string(), &RowDefaults::default()).index, 1);
    }

    #[test]
    fn ranking_sorts_by_profit_and_keeps_index() {
        let portfolio = recompute_edited(&[
            row(1, 100.0, 110.0, 0.0),
            row(2, 100.0, 200.0, 0.0),
            row(3, 100.0, 50.0, 0.0),
        ]);
        let ranked = rank_by_profit(&portfolio.rows);

        assert_eq!(ranked.iter().map(|r| r.index).collect::<Vec<_>>(), vec![2, 1, 3]);
        assert_eq!(portfolio.rows[0].skin.index, 1);
    }

    #[test]
    fn histogram_counts_every_value() {
        let values = [-10.0, 0.0, 5.0, 10.0, 10.0];
        let bins = profit_histogram(&values, PROFIT_HISTOGRAM_BINS);

        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins.last().map(|b| b.count), Some(2));
    }

    #[test]
    fn histogram_handles_degenerate_input() {
        assert!(profit_histogram(&[], 20).is_empty());

        let bins = profit_histogram(&[3.0, 3.0, 3.0], 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn cumulative_roi_is_running_sum() {
        let portfolio = recompute_edited(&[row(1, 100.0, 110.0, 0.0), row(2, 100.0, 120.0, 0.0)]);
        let series = cumulative_roi(&portfolio.rows);

        assert!((series[0] - 10.0).abs() < 1e-9);
        assert!((series[1] - 30.0).abs() < 1e-9);
    }
}
