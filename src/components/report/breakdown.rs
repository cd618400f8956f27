use yew::prelude::*;

use super::charts::RevenuePieChart;
use crate::api_client::analysis::{FinancialBucket, FinancialReport};
use crate::common::format::format_currency;

fn bucket_total(bucket: &Option<FinancialBucket>) -> f64 {
    bucket.as_ref().map_or(0.0, |b| b.total)
}

fn stat_row(label: &str, signed_value: String, value_class: &'static str) -> Html {
    html! {
        <div class="flex justify-between py-2 border-b border-base-200 last:border-none">
            <span>{label.to_string()}</span>
            <span class={value_class}>{signed_value}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BreakdownProps {
    pub report: FinancialReport,
}

/// The "Financial Components" grid: revenue breakdown with the category pie,
/// the obligations/assets stat table, and the inventory card.
#[function_component(Breakdown)]
pub fn breakdown(props: &BreakdownProps) -> Html {
    let report = &props.report;

    let revenue_total = report.revenue_streams.as_ref().map_or(0.0, |r| r.total);
    let receivables = bucket_total(&report.accounts_receivable);
    let payables = bucket_total(&report.accounts_payable);
    let loans = bucket_total(&report.loan_obligations);
    let tax = bucket_total(&report.tax_compliance);
    let inventory = bucket_total(&report.inventory_levels);

    html! {
        <>
            <h3 class="text-lg font-bold mb-4">{"Financial Components"}</h3>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4 mb-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Revenue Breakdown"}</h3>
                        <p class="text-sm text-gray-500">
                            {format!("Total: {}", format_currency(revenue_total))}
                        </p>
                        <RevenuePieChart revenue={report.revenue_streams.clone()} />
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Obligations & Assets"}</h3>
                        {stat_row("Receivables (AR):", format!("+{}", format_currency(receivables)), "text-success")}
                        {stat_row("Payables (AP):", format!("-{}", format_currency(payables)), "text-error")}
                        {stat_row("Loans/Debt:", format!("-{}", format_currency(loans)), "text-warning")}
                        {stat_row("Tax Due:", format!("-{}", format_currency(tax)), "text-error")}
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Inventory Status"}</h3>
                        <div class="text-3xl font-bold">{format_currency(inventory)}</div>
                        <p class="text-sm text-gray-500 mt-2">
                            {"Current value of stock on hand."}
                        </p>
                    </div>
                </div>
            </div>
        </>
    }
}
