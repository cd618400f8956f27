use yew::prelude::*;

use crate::api_client::analysis::FinancialReport;
use crate::common::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub report: FinancialReport,
}

/// High-level summary row: risk, net profit, credit score and, when the
/// backend classified one, the detected industry.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let report = &props.report;

    // Binary risk styling: "Low" or everything else.
    let risk_class = if report.is_low_risk() {
        "text-success"
    } else {
        "text-error"
    };
    let risk_label = report.risk_assessment.clone().unwrap_or_default();

    let credit_score = report
        .credit_score_estimate
        .as_ref()
        .map(|score| score.to_string())
        .unwrap_or_default();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-4 mb-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Risk Level"}</div>
                    <div class={classes!("stat-value", risk_class)}>{risk_label}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Net Profit"}</div>
                    <div class="stat-value">{format_currency(report.net_profit())}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Credit Score Est."}</div>
                    <div class="stat-value text-primary">{credit_score}</div>
                </div>
            </div>
            {if let Some(industry) = report.industry.as_ref() {
                html! {
                    <div class="stats shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">{"Industry"}</div>
                            <div class="stat-value text-secondary text-2xl">{industry.clone()}</div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
