use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod settings;

use api_client::analysis::{FinancialReport, Language};
use api_client::banking::BankingData;
use common::toast::ToastProvider;
use components::layout::Layout;
use components::report::ReportView;
use components::upload::UploadPanel;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::About => html! {
            <div class="p-6">
                {"FinHealth AI — upload a financial statement and get an AI-generated health report."}
            </div>
        },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <div class="p-6"><h1 class="text-2xl font-bold">{"404 Not Found"}</h1></div> }
        }
    }
}

/// Home page: owns the report handed up by the upload panel and swaps
/// between the upload view and the report view.
#[function_component(HomePage)]
fn home_page() -> Html {
    let report = use_state(|| None::<FinancialReport>);
    let language = use_state(Language::default);

    let on_upload_success = {
        let report = report.clone();
        Callback::from(move |new_report: FinancialReport| {
            log::info!("Report received (id: {:?})", new_report.id);
            report.set(Some(new_report));
        })
    };

    let on_reset = {
        let report = report.clone();
        Callback::from(move |_| {
            log::debug!("Returning to upload view");
            report.set(None);
        })
    };

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |new_language: Language| language.set(new_language))
    };

    // The report stays immutable except for the banking sub-object, which a
    // successful sync replaces wholesale.
    let on_banking_synced = {
        let report = report.clone();
        Callback::from(move |banking: BankingData| {
            if let Some(current) = (*report).as_ref() {
                let mut updated = current.clone();
                updated.banking_data = Some(banking);
                report.set(Some(updated));
            }
        })
    };

    html! {
        <Layout
            language={*language}
            on_language_change={on_language_change}
            has_report={report.is_some()}
            on_reset={on_reset}
        >
            {match (*report).clone() {
                None => html! {
                    <UploadPanel on_success={on_upload_success} language={*language} />
                },
                Some(report) => html! {
                    <ReportView {report} on_banking_synced={on_banking_synced} />
                },
            }}
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings come first so the logger picks up the configured level.
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== FinHealth Dashboard Starting ===");
    log::debug!("API base: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
