use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::format::percent;

#[component]
pub fn RoiBadge(value: f64) -> Element {
    let text = percent(value);
    rsx! {
        span { class: theme::badge_class(value), "{text}" }
    }
}
