use super::entities::{Modifiers, Portfolio, PortfolioRow, PricedSkin, SkinInput, Totals};

/// Prices a single skin. `reinvested_buy_price` replaces the entered buy price
/// when present. Negative fees and proceeds are clamped to zero.
pub fn price_item(
    raw: &SkinInput,
    modifiers: &Modifiers,
    reinvested_buy_price: Option<f64>,
) -> PricedSkin {
    let buy_price = reinvested_buy_price.unwrap_or(raw.buy_price);

    let sell_price_adj = raw.sell_price_raw * (1.0 + modifiers.sell_pct / 100.0);
    // Not capped at 100: a fee above 100% drives proceeds to the zero clamp.
    let fee_adj = (raw.fee_raw + modifiers.fee_pct).max(0.0);
    let net_received = (sell_price_adj * (1.0 - fee_adj / 100.0)).max(0.0);
    let profit = net_received - buy_price;

    PricedSkin {
        index: raw.index,
        name: raw.name.clone(),
        buy_price,
        sell_price_adj,
        fee_adj,
        net_received,
        profit,
        roi: roi_pct(profit, buy_price),
    }
}

/// Prices every skin in ascending `index` order. With reinvestment enabled each
/// skin after the first buys with the previous skin's net proceeds.
pub fn fold_portfolio(
    items: &[SkinInput],
    modifiers: &Modifiers,
    reinvestment: bool,
) -> Vec<PricedSkin> {
    let mut ordered: Vec<&SkinInput> = items.iter().collect();
    ordered.sort_by_key(|item| item.index);

    let mut carried_funds: Option<f64> = None;
    let mut priced = Vec::with_capacity(ordered.len());

    for item in ordered {
        let reinvested = if reinvestment { carried_funds } else { None };
        let skin = price_item(item, modifiers, reinvested);
        carried_funds = Some(skin.net_received);
        priced.push(skin);
    }

    priced
}

pub fn aggregate_totals<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a PricedSkin>,
{
    let (total_invested, total_received) = items
        .into_iter()
        .fold((0.0, 0.0), |(invested, received), skin| {
            (invested + skin.buy_price, received + skin.net_received)
        });
    let total_profit = total_received - total_invested;

    Totals {
        total_invested,
        total_received,
        total_profit,
        total_roi: roi_pct(total_profit, total_invested),
    }
}

/// Initial investment (first buy price) plus every profit up to each row.
pub fn cumulative_money(skins: &[PricedSkin]) -> Vec<f64> {
    let Some(first) = skins.first() else {
        return Vec::new();
    };

    skins
        .iter()
        .scan(first.buy_price, |running, skin| {
            *running += skin.profit;
            Some(*running)
        })
        .collect()
}

/// Attaches the cumulative money column and totals to already priced skins.
pub fn assemble_portfolio(skins: Vec<PricedSkin>) -> Portfolio {
    let totals = aggregate_totals(&skins);
    let cumulative = cumulative_money(&skins);
    let rows = skins
        .into_iter()
        .zip(cumulative)
        .map(|(skin, cumulative_money)| PortfolioRow {
            skin,
            cumulative_money,
        })
        .collect();

    Portfolio { rows, totals }
}

pub fn build_portfolio(items: &[SkinInput], modifiers: &Modifiers, reinvestment: bool) -> Portfolio {
    assemble_portfolio(fold_portfolio(items, modifiers, reinvestment))
}

fn roi_pct(profit: f64, invested: f64) -> f64 {
    if invested > 0.0 {
        profit / invested * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn skin(index: usize, buy: f64, sell: f64, fee: f64) -> SkinInput {
        SkinInput::new(index, buy, sell, fee)
    }

    #[test]
    fn prices_single_item_without_modifiers() {
        let priced = price_item(&skin(1, 100.0, 150.0, 8.0), &Modifiers::default(), None);

        assert!(approx_eq(priced.sell_price_adj, 150.0));
        assert!(approx_eq(priced.fee_adj, 8.0));
        assert!(approx_eq(priced.net_received, 138.0));
        assert!(approx_eq(priced.profit, 38.0));
        assert!(approx_eq(priced.roi, 38.0));
        assert_eq!(priced.name, "Skin 1");
    }

    #[test]
    fn applies_sell_and_fee_modifiers() {
        let modifiers = Modifiers::new(-50.0, 10.0);
        let priced = price_item(&skin(1, 100.0, 150.0, 8.0), &modifiers, None);

        assert!(approx_eq(priced.sell_price_adj, 75.0));
        assert!(approx_eq(priced.fee_adj, 18.0));
        assert!(approx_eq(priced.net_received, 61.5));
    }

    #[test]
    fn clamps_negative_fee_to_zero() {
        let modifiers = Modifiers::new(0.0, -10.0);
        let priced = price_item(&skin(1, 100.0, 150.0, 2.0), &modifiers, None);

        assert_eq!(priced.fee_adj, 0.0);
        assert!(approx_eq(priced.net_received, 150.0));
    }

    #[test]
    fn fee_above_hundred_clamps_net_to_zero() {
        let modifiers = Modifiers::new(0.0, 10.0);
        let priced = price_item(&skin(1, 100.0, 150.0, 100.0), &modifiers, None);

        assert!(approx_eq(priced.fee_adj, 110.0));
        assert_eq!(priced.net_received, 0.0);
        assert!(approx_eq(priced.profit, -100.0));
        assert!(approx_eq(priced.roi, -100.0));
    }

    #[test]
    fn zero_buy_price_reports_zero_roi() {
        let priced = price_item(&skin(1, 0.0, 150.0, 8.0), &Modifiers::default(), None);

        assert_eq!(priced.roi, 0.0);
        assert!(approx_eq(priced.profit, 138.0));
    }

    #[test]
    fn reinvested_buy_price_overrides_entered_price() {
        let priced = price_item(&skin(2, 100.0, 150.0, 8.0), &Modifiers::default(), Some(138.0));

        assert!(approx_eq(priced.buy_price, 138.0));
        assert!(approx_eq(priced.profit, 0.0));
    }

    #[test]
    fn reinvestment_chains_net_proceeds() {
        let items = vec![
            skin(1, 100.0, 150.0, 8.0),
            skin(2, 999.0, 150.0, 8.0),
            skin(3, 5.0, 300.0, 10.0),
        ];
        let priced = fold_portfolio(&items, &Modifiers::default(), true);

        assert!(approx_eq(priced[0].buy_price, 100.0));
        for pair in priced.windows(2) {
            assert!(approx_eq(pair[1].buy_price, pair[0].net_received));
        }
        assert!(approx_eq(priced[1].profit, 0.0));
    }

    #[test]
    fn without_reinvestment_entered_prices_are_used() {
        let items = vec![skin(1, 100.0, 150.0, 8.0), skin(2, 40.0, 50.0, 0.0)];
        let priced = fold_portfolio(&items, &Modifiers::default(), false);

        assert!(approx_eq(priced[1].buy_price, 40.0));
        assert!(approx_eq(priced[1].profit, 10.0));
    }

    #[test]
    fn fold_follows_index_order() {
        let items = vec![skin(2, 999.0, 150.0, 8.0), skin(1, 100.0, 150.0, 8.0)];
        let priced = fold_portfolio(&items, &Modifiers::default(), true);

        assert_eq!(priced.iter().map(|s| s.index).collect::<Vec<_>>(), vec![1, 2]);
        assert!(approx_eq(priced[0].buy_price, 100.0));
        assert!(approx_eq(priced[1].buy_price, 138.0));
    }

    #[test]
    fn zero_proceeds_propagate_as_zero_buy_price() {
        let items = vec![skin(1, 100.0, 0.0, 8.0), skin(2, 100.0, 150.0, 8.0)];
        let priced = fold_portfolio(&items, &Modifiers::default(), true);

        assert_eq!(priced[1].buy_price, 0.0);
        assert_eq!(priced[1].roi, 0.0);
    }

    #[test]
    fn fold_is_idempotent() {
        let items = vec![skin(1, 100.0, 150.0, 8.0), skin(2, 80.0, 120.0, 5.5)];
        let modifiers = Modifiers::new(12.0, -1.5);

        assert_eq!(
            fold_portfolio(&items, &modifiers, true),
            fold_portfolio(&items, &modifiers, true)
        );
    }

    #[test]
    fn totals_satisfy_profit_identity() {
        let items = vec![
            skin(1, 100.0, 150.0, 8.0),
            skin(2, 80.0, 60.0, 5.0),
            skin(3, 0.0, 10.0, 0.0),
        ];
        let priced = fold_portfolio(&items, &Modifiers::new(7.0, 1.3), false);
        let totals = aggregate_totals(&priced);

        assert_eq!(totals.total_profit, totals.total_received - totals.total_invested);
        assert!(approx_eq(totals.total_invested, 180.0));
        assert!(approx_eq(
            totals.total_roi,
            totals.total_profit / totals.total_invested * 100.0
        ));
    }

    #[test]
    fn empty_portfolio_has_zero_totals() {
        let portfolio = build_portfolio(&[], &Modifiers::default(), true);

        assert!(portfolio.rows.is_empty());
        assert_eq!(portfolio.totals, Totals::default());
        assert_eq!(portfolio.totals.total_roi, 0.0);
    }

    #[test]
    fn cumulative_money_starts_from_first_buy() {
        let items = vec![skin(1, 100.0, 150.0, 8.0), skin(2, 50.0, 40.0, 0.0)];
        let portfolio = build_portfolio(&items, &Modifiers::default(), false);

        let cumulative: Vec<f64> = portfolio.rows.iter().map(|r| r.cumulative_money).collect();
        assert!(approx_eq(cumulative[0], 138.0));
        assert!(approx_eq(cumulative[1], 128.0));
    }
}
