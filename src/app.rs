use dioxus::prelude::*;

use crate::{
    domain::{AppState, PortfolioRow},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AdvancedPage, BasicPage},
        shell::Shell,
    },
    util::{
        assets,
        config::{load_config, DashboardConfig},
        download::save_portfolio_csv,
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/basic")]
    Basic {},
    #[route("/advanced")]
    Advanced {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.clone());

    let state = use_signal(|| AppState::from_config(&config));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes `rows` to the configured export directory and reports the outcome.
pub fn export_rows(
    rows: &[PortfolioRow],
    config: &DashboardConfig,
    toasts: Signal<Vec<ToastMessage>>,
) {
    if rows.is_empty() {
        push_toast(toasts, ToastKind::Warning, "No skins to export");
        return;
    }

    let dir = config.resolved_export_dir();

    match save_portfolio_csv(&dir, rows) {
        Ok(path) => push_toast(
            toasts,
            ToastKind::Success,
            format!("Exported {} skins to {}", rows.len(), path.display()),
        ),
        Err(err) => {
            tracing::error!(dir = %dir.display(), "export failed: {err}");
            push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
        }
    }
}

#[component]
pub fn Basic() -> Element {
    rsx! { Shell { BasicPage {} } }
}

#[component]
pub fn Advanced() -> Element {
    rsx! { Shell { AdvancedPage {} } }
}
