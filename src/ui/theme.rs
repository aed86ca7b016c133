//! Shared class names and chart colours so pages stay consistent.

// ============================================
// CHART COLOURS
// ============================================

pub const PROFIT_POSITIVE: &str = "#22c55e";
pub const PROFIT_NEGATIVE: &str = "#ef4444";
pub const ROI_LINE: &str = "#3b82f6";
pub const GROWTH_LINE: &str = "#f97316";
pub const CUMULATIVE_ROI_LINE: &str = "#a855f7";
pub const SCATTER_DOT: &str = "#14b8a6";
pub const HISTOGRAM_BAR: &str = "#38bdf8";

pub fn profit_color(value: f64) -> &'static str {
    if value > 0.0 {
        PROFIT_POSITIVE
    } else {
        PROFIT_NEGATIVE
    }
}

// ============================================
// TEXT / BADGES
// ============================================

pub fn tone_class(value: f64) -> &'static str {
    if value > 0.0 {
        "positive"
    } else if value < 0.0 {
        "negative"
    } else {
        "muted"
    }
}

pub fn badge_class(value: f64) -> &'static str {
    if value > 0.0 {
        "badge badge-green"
    } else if value < 0.0 {
        "badge badge-red"
    } else {
        "badge badge-neutral"
    }
}

// ============================================
// NAVIGATION / INPUTS
// ============================================

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

pub fn input_class(locked: bool) -> &'static str {
    if locked {
        "input input-locked"
    } else {
        "input"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_profit_is_not_green() {
        assert_eq!(profit_color(0.0), PROFIT_NEGATIVE);
        assert_eq!(profit_color(0.01), PROFIT_POSITIVE);
        assert_eq!(tone_class(0.0), "muted");
    }
}
