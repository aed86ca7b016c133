//! Pricing and portfolio logic lives here; nothing in this module touches the UI.

pub mod analysis;
pub mod app_state;
pub mod entities;
pub mod export;
pub mod pricing;

pub use app_state::{AppState, ChartKind, Scenario};
pub use entities::{EditableRow, HistogramBin, Modifiers, Portfolio, PortfolioRow, RankedSkin};
