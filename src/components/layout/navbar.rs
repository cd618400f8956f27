use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::analysis::Language;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub language: Language,
    pub on_language_change: Callback<Language>,
    /// Whether a report is currently on screen.
    pub has_report: bool,
    /// Returns to the upload view, discarding the current report.
    pub on_reset: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let on_language_change = {
        let on_language_change = props.on_language_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let language = Language::from_tag(&select.value());
            log::debug!("Report language changed to {}", language.tag());
            on_language_change.emit(language);
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold">{"FinHealth AI"}</h1>
            </div>
            <div class="flex-none gap-2">
                <select
                    class="select select-sm select-bordered"
                    onchange={on_language_change}
                >
                    { for [Language::En, Language::Hi].iter().map(|language| {
                        html! {
                            <option
                                value={language.tag()}
                                selected={*language == props.language}
                            >
                                {language.label()}
                            </option>
                        }
                    })}
                </select>

                <button
                    class={classes!("btn", "btn-ghost", "btn-sm", (!props.has_report).then_some("btn-active"))}
                    onclick={on_reset}
                >
                    {"Dashboard"}
                </button>
                {if props.has_report {
                    html! { <span class="btn btn-ghost btn-sm btn-active">{"Report"}</span> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
