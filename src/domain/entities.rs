/// Raw, user-entered values for one skin. `index` is 1-based and stable.
#[derive(Clone, Debug, PartialEq)]
pub struct SkinInput {
    pub index: usize,
    pub name: String,
    pub buy_price: f64,
    pub sell_price_raw: f64,
    pub fee_raw: f64,
}

impl SkinInput {
    pub fn new(index: usize, buy_price: f64, sell_price_raw: f64, fee_raw: f64) -> Self {
        Self {
            index,
            name: default_skin_name(index),
            buy_price,
            sell_price_raw,
            fee_raw,
        }
    }
}

pub fn default_skin_name(index: usize) -> String {
    format!("Skin {index}")
}

/// Global what-if adjustments applied to every skin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Modifiers {
    /// Percentage in [-50, 50].
    pub sell_pct: f64,
    /// Percentage points in [-10, 10].
    pub fee_pct: f64,
}

impl Modifiers {
    pub const SELL_RANGE: (f64, f64) = (-50.0, 50.0);
    pub const FEE_RANGE: (f64, f64) = (-10.0, 10.0);

    pub fn new(sell_pct: f64, fee_pct: f64) -> Self {
        Self {
            sell_pct: sell_pct.clamp(Self::SELL_RANGE.0, Self::SELL_RANGE.1),
            fee_pct: fee_pct.clamp(Self::FEE_RANGE.0, Self::FEE_RANGE.1),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.sell_pct == 0.0 && self.fee_pct == 0.0
    }
}

/// Derived metrics for one skin after pricing.
#[derive(Clone, Debug, PartialEq)]
pub struct PricedSkin {
    pub index: usize,
    pub name: String,
    pub buy_price: f64,
    pub sell_price_adj: f64,
    pub fee_adj: f64,
    pub net_received: f64,
    pub profit: f64,
    pub roi: f64,
}

/// A priced skin plus the running portfolio value up to and including it.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioRow {
    pub skin: PricedSkin,
    pub cumulative_money: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub total_invested: f64,
    pub total_received: f64,
    pub total_profit: f64,
    pub total_roi: f64,
}

/// Everything the dashboard renders for one recomputation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Portfolio {
    pub rows: Vec<PortfolioRow>,
    pub totals: Totals,
}

impl Portfolio {
    pub fn skins(&self) -> impl Iterator<Item = &PricedSkin> {
        self.rows.iter().map(|row| &row.skin)
    }
}

/// One row of the advanced data grid. Sell price and fee are the already
/// adjusted values; derived columns are never stored here.
#[derive(Clone, Debug, PartialEq)]
pub struct EditableRow {
    pub id: String,
    pub index: usize,
    pub name: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub fee_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedSkin {
    pub index: usize,
    pub name: String,
    pub profit: f64,
    pub roi: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}
