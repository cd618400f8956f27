use yew::prelude::*;

use super::navbar::Navbar;
use crate::api_client::analysis::Language;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub language: Language,
    pub on_language_change: Callback<Language>,
    #[prop_or_default]
    pub has_report: bool,
    pub on_reset: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar
                language={props.language}
                on_language_change={props.on_language_change.clone()}
                has_report={props.has_report}
                on_reset={props.on_reset.clone()}
            />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
