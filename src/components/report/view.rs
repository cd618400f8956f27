use yew::prelude::*;

use super::banking::BankingPanel;
use super::breakdown::Breakdown;
use super::summary::SummaryCards;
use crate::api_client::analysis::FinancialReport;
use crate::api_client::banking::BankingData;

#[derive(Properties, PartialEq)]
pub struct ReportViewProps {
    pub report: FinancialReport,
    /// Bubbles a successful bank sync up to the report owner, which swaps
    /// the banking sub-object in place.
    pub on_banking_synced: Callback<BankingData>,
}

/// Stateless rendering of a financial report. All derived values are
/// recomputed per render; the report itself is never mutated here.
#[function_component(ReportView)]
pub fn report_view(props: &ReportViewProps) -> Html {
    let report = &props.report;

    html! {
        <>
            {if let Some(filename) = report.filename.as_ref() {
                html! {
                    <p class="text-sm text-gray-500 mb-4">
                        <i class="fas fa-file-invoice"></i>
                        {format!(" Source: {}", filename)}
                    </p>
                }
            } else {
                html! {}
            }}

            <SummaryCards report={report.clone()} />

            {if report.recommendations.is_empty() {
                html! {}
            } else {
                html! {
                    <div class="card bg-base-100 shadow mb-6">
                        <div class="card-body">
                            <h3 class="card-title">{"AI Recommendations"}</h3>
                            <ul class="space-y-2">
                                { for report.recommendations.iter().map(|rec| {
                                    html! {
                                        <li class="flex items-center gap-2">
                                            <span class="text-accent text-lg">{"•"}</span>
                                            <span>{rec.clone()}</span>
                                        </li>
                                    }
                                })}
                            </ul>
                        </div>
                    </div>
                }
            }}

            <Breakdown report={report.clone()} />

            <BankingPanel
                report_id={report.id}
                banking={report.banking_data.clone()}
                on_synced={props.on_banking_synced.clone()}
            />
        </>
    }
}
