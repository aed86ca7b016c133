pub mod chart;
pub mod editable_grid;
pub mod kpi_card;
pub mod results_table;
pub mod roi_badge;
pub mod skin_input;
pub mod toast;
