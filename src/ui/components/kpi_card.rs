use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    #[props(default = "")] tone: &'static str,
) -> Element {
    rsx! {
        div {
            class: "kpi",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value {tone}", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-desc", "{desc}" }
            }
        }
    }
}
