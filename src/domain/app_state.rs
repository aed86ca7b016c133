use super::entities::{default_skin_name, Modifiers, Portfolio, SkinInput};
use super::pricing::build_portfolio;
use crate::util::config::DashboardConfig;

/// Upper bound for the item count input.
pub const MAX_ITEMS: usize = 100;

/// Which chart the dashboard shows when focus mode is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Profit,
    Roi,
    Growth,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Profit, ChartKind::Roi, ChartKind::Growth];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Profit => "Profit per Skin",
            ChartKind::Roi => "ROI % per Skin",
            ChartKind::Growth => "Portfolio Growth",
        }
    }
}

/// Values the fallback row is created with when the item count grows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowDefaults {
    pub buy_price: f64,
    pub sell_price: f64,
    pub fee_pct: f64,
}

impl Default for RowDefaults {
    fn default() -> Self {
        Self {
            buy_price: 100.0,
            sell_price: 150.0,
            fee_pct: 8.0,
        }
    }
}

impl From<&DashboardConfig> for RowDefaults {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            buy_price: config.default_buy_price.max(0.0),
            sell_price: config.default_sell_price.max(0.0),
            fee_pct: config.default_fee_pct.clamp(0.0, 100.0),
        }
    }
}

/// The part of [`AppState`] that affects priced results. Chart focus and
/// panel collapse are display-only and left out.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub inputs: Vec<SkinInput>,
    pub modifiers: Modifiers,
    pub reinvestment: bool,
}

impl Scenario {
    pub fn portfolio(&self) -> Portfolio {
        tracing::debug!(
            items = self.inputs.len(),
            reinvestment = self.reinvestment,
            sell_pct = self.modifiers.sell_pct,
            fee_pct = self.modifiers.fee_pct,
            "recomputing portfolio"
        );
        build_portfolio(&self.inputs, &self.modifiers, self.reinvestment)
    }
}

/// Input record owned by the UI between recomputations. Nothing derived is
/// stored here; call [`AppState::portfolio`] after any change.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub inputs: Vec<SkinInput>,
    pub modifiers: Modifiers,
    pub reinvestment: bool,
    pub custom_names: bool,
    pub chart_focus: Option<ChartKind>,
    pub row_defaults: RowDefaults,
    /// Rows whose input panel has been collapsed after an edit.
    pub collapsed: Vec<usize>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_defaults(RowDefaults::default(), 2)
    }
}

impl AppState {
    pub fn with_defaults(row_defaults: RowDefaults, item_count: usize) -> Self {
        let mut state = Self {
            inputs: Vec::new(),
            modifiers: Modifiers::default(),
            reinvestment: false,
            custom_names: false,
            chart_focus: None,
            row_defaults,
            collapsed: Vec::new(),
        };
        state.set_item_count(item_count);
        state
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_defaults(RowDefaults::from(config), config.default_item_count)
    }

    pub fn item_count(&self) -> usize {
        self.inputs.len()
    }

    /// Grows or shrinks the input list to between 1 and [`MAX_ITEMS`] skins.
    /// Existing rows keep their values.
    pub fn set_item_count(&mut self, count: usize) {
        let count = count.clamp(1, MAX_ITEMS);
        let defaults = self.row_defaults;
        self.inputs.truncate(count);
        let start = self.inputs.len() + 1;
        self.inputs.extend((start..=count).map(|index| {
            SkinInput::new(index, defaults.buy_price, defaults.sell_price, defaults.fee_pct)
        }));
        self.collapsed.retain(|index| *index <= count);
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut SkinInput> {
        self.inputs.iter_mut().find(|input| input.index == index)
    }

    /// Entered buy prices are ignored for every skin after the first while
    /// reinvestment is on.
    pub fn buy_price_locked(&self, index: usize) -> bool {
        self.reinvestment && index > 1
    }

    pub fn update_buy_price(&mut self, index: usize, value: f64) {
        if self.buy_price_locked(index) {
            return;
        }
        if let Some(input) = self.input_mut(index) {
            input.buy_price = value.max(0.0);
        }
        self.collapse(index);
    }

    pub fn update_sell_price(&mut self, index: usize, value: f64) {
        if let Some(input) = self.input_mut(index) {
            input.sell_price_raw = value.max(0.0);
        }
        self.collapse(index);
    }

    pub fn update_fee(&mut self, index: usize, value: f64) {
        if let Some(input) = self.input_mut(index) {
            input.fee_raw = value.clamp(0.0, 100.0);
        }
        self.collapse(index);
    }

    pub fn update_name(&mut self, index: usize, name: String) {
        if let Some(input) = self.input_mut(index) {
            input.name = name;
        }
    }

    pub fn set_modifiers(&mut self, sell_pct: f64, fee_pct: f64) {
        self.modifiers = Modifiers::new(sell_pct, fee_pct);
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.contains(&index)
    }

    pub fn toggle_collapsed(&mut self, index: usize) {
        if let Some(position) = self.collapsed.iter().position(|i| *i == index) {
            self.collapsed.remove(position);
        } else {
            self.collapsed.push(index);
        }
    }

    fn collapse(&mut self, index: usize) {
        if !self.collapsed.contains(&index) {
            self.collapsed.push(index);
        }
    }

    /// Panel title for a skin: always `Skin {i}`, plus the custom name when
    /// custom naming is on.
    pub fn row_label(&self, input: &SkinInput) -> String {
        let base = default_skin_name(input.index);
        if self.custom_names {
            format!("{base} ({})", input.name)
        } else {
            base
        }
    }

    /// Inputs as the pricing engine sees them: generated names unless custom
    /// naming is enabled.
    pub fn effective_inputs(&self) -> Vec<SkinInput> {
        self.inputs
            .iter()
            .map(|input| {
                let mut input = input.clone();
                if !self.custom_names || input.name.trim().is_empty() {
                    input.name = default_skin_name(input.index);
                }
                input
            })
            .collect()
    }

    pub fn scenario(&self) -> Scenario {
        Scenario {
            inputs: self.effective_inputs(),
            modifiers: self.modifiers,
            reinvestment: self.reinvestment,
        }
    }

    pub fn portfolio(&self) -> Portfolio {
        self.scenario().portfolio()
    }

    pub fn reset_inputs(&mut self) {
        let count = self.item_count();
        self.inputs.clear();
        self.collapsed.clear();
        self.set_item_count(count);
    }
}
