use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::theme;
use crate::util::format::parse_number;

/// Collapsible input panel for one skin. `effective_buy` is the buy price the
/// last recomputation used, shown read-only while reinvestment feeds it.
#[component]
pub fn SkinInputRow(index: usize, effective_buy: f64) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let Some((input, label, locked, collapsed, custom_names)) = state.with(|st| {
        st.inputs.iter().find(|i| i.index == index).map(|input| {
            (
                input.clone(),
                st.row_label(input),
                st.buy_price_locked(index),
                st.is_collapsed(index),
                st.custom_names,
            )
        })
    }) else {
        return rsx! { Fragment {} };
    };

    let buy_value = if locked { effective_buy } else { input.buy_price };
    let buy_label = if locked { "Buy Price (Auto)" } else { "Buy Price" };
    let chevron = if collapsed { "▸" } else { "▾" };

    rsx! {
        div { class: "expander",
            button {
                class: "expander-head",
                onclick: move |_| state.with_mut(|st| st.toggle_collapsed(index)),
                span { "{label}" }
                span { class: "muted", "{chevron}" }
            }
            if !collapsed {
                div { class: "expander-body",
                    NumberField {
                        label: buy_label,
                        value: buy_value,
                        step: "1",
                        locked,
                        on_change: move |value| state.with_mut(|st| st.update_buy_price(index, value)),
                    }
                    NumberField {
                        label: "Sell Price",
                        value: input.sell_price_raw,
                        step: "1",
                        locked: false,
                        on_change: move |value| state.with_mut(|st| st.update_sell_price(index, value)),
                    }
                    NumberField {
                        label: "Marketplace Fee %",
                        value: input.fee_raw,
                        step: "0.1",
                        locked: false,
                        on_change: move |value| state.with_mut(|st| st.update_fee(index, value)),
                    }
                    if custom_names {
                        div { class: "field",
                            label { class: "field-label", "Custom Name" }
                            input {
                                class: "input",
                                value: input.name.clone(),
                                oninput: move |evt: FormEvent| state.with_mut(|st| st.update_name(index, evt.value())),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: f64,
    step: &'static str,
    locked: bool,
    on_change: EventHandler<f64>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: theme::input_class(locked),
                r#type: "number",
                min: "0",
                step: step,
                disabled: locked,
                value: value.to_string(),
                onchange: move |evt: FormEvent| {
                    if let Some(parsed) = parse_number(&evt.value()) {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}
