use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, ChartKind, Modifiers};
use crate::ui::theme;
use crate::util::{
    format::parse_number,
    version::{version_label, APP_NAME},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "main",
                header { class: "header",
                    h1 { "💰 {APP_NAME}" }
                    span { class: "version", "{version}" }
                }
                nav { class: "tabs",
                    NavButton {
                        active: matches!(current_route, Route::Basic {}),
                        onclick: move |_| { nav.push(Route::Basic {}); },
                        label: "Basic Dashboard",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Advanced {}),
                        onclick: move |_| { nav.push(Route::Advanced {}); },
                        label: "Advanced Data",
                    }
                }
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::tab_class(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (reinvestment, custom_names, chart_focus, modifiers) =
        state.with(|st| (st.reinvestment, st.custom_names, st.chart_focus, st.modifiers));
    let (sell_min, sell_max) = Modifiers::SELL_RANGE;
    let (fee_min, fee_max) = Modifiers::FEE_RANGE;
    let sell_label = format!("Adjust Sell Prices: {:.0}%", modifiers.sell_pct);
    let fee_label = format!("Adjust Marketplace Fees: {:.1}%", modifiers.fee_pct);

    rsx! {
        aside { class: "sidebar",
            section {
                h2 { "⚙️ Re-investment Mode" }
                label { class: "checkbox-row",
                    input {
                        r#type: "checkbox",
                        checked: reinvestment,
                        onchange: move |evt: FormEvent| state.with_mut(|st| st.reinvestment = evt.checked()),
                    }
                    "Enable Re-investment Mode"
                }
                small { "Profit from each skin is reinvested sequentially. Subsequent buy prices are auto-filled." }
            }

            section {
                h2 { "📝 Custom Skin Names" }
                label { class: "checkbox-row",
                    input {
                        r#type: "checkbox",
                        checked: custom_names,
                        onchange: move |evt: FormEvent| state.with_mut(|st| st.custom_names = evt.checked()),
                    }
                    "Enable Custom Names"
                }
            }

            section {
                h2 { "📊 Chart Display Mode" }
                label { class: "checkbox-row",
                    input {
                        r#type: "checkbox",
                        checked: chart_focus.is_some(),
                        onchange: move |evt: FormEvent| {
                            let focus = evt.checked().then_some(ChartKind::default());
                            state.with_mut(|st| st.chart_focus = focus);
                        },
                    }
                    "Enable Chart Focus Mode (show only selected chart)"
                }
                if let Some(selected) = chart_focus {
                    div { class: "stack", style: "margin-top: 10px",
                        for kind in ChartKind::ALL {
                            label { class: "checkbox-row",
                                input {
                                    r#type: "radio",
                                    name: "chart-focus",
                                    checked: selected == kind,
                                    onchange: move |_| state.with_mut(|st| st.chart_focus = Some(kind)),
                                }
                                {kind.label()}
                            }
                        }
                    }
                }
            }

            section {
                h2 { "🔧 What-if Scenario" }
                div { class: "stack",
                    div { class: "field",
                        span { class: "field-label", "{sell_label}" }
                        input {
                            class: "slider",
                            r#type: "range",
                            min: "{sell_min}",
                            max: "{sell_max}",
                            step: "1",
                            value: modifiers.sell_pct.to_string(),
                            oninput: move |evt: FormEvent| {
                                if let Some(value) = parse_number(&evt.value()) {
                                    state.with_mut(|st| st.set_modifiers(value, st.modifiers.fee_pct));
                                }
                            },
                        }
                    }
                    div { class: "field",
                        span { class: "field-label", "{fee_label}" }
                        input {
                            class: "slider",
                            r#type: "range",
                            min: "{fee_min}",
                            max: "{fee_max}",
                            step: "0.1",
                            value: modifiers.fee_pct.to_string(),
                            oninput: move |evt: FormEvent| {
                                if let Some(value) = parse_number(&evt.value()) {
                                    state.with_mut(|st| st.set_modifiers(st.modifiers.sell_pct, value));
                                }
                            },
                        }
                    }
                    if !modifiers.is_neutral() {
                        button {
                            class: "btn",
                            onclick: move |_| state.with_mut(|st| st.modifiers = Modifiers::default()),
                            "Reset Scenario"
                        }
                    }
                }
            }
        }
    }
}
