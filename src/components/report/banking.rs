use yew::prelude::*;

use crate::api_client::banking::{sync_bank_account, BankProvider, BankingData};
use crate::common::format::format_currency;
use crate::common::toast::ToastContext;

const SYNC_FAILED_MESSAGE: &str = "Failed to sync bank account. Please try again.";

#[derive(Properties, PartialEq)]
pub struct BankingPanelProps {
    /// Identifier of the report the sync attaches to.
    #[prop_or_default]
    pub report_id: Option<i64>,
    #[prop_or_default]
    pub banking: Option<BankingData>,
    /// Replaces the held banking data wholesale on a successful sync.
    pub on_synced: Callback<BankingData>,
}

/// Banking integration panel. Without connected data it offers the mocked
/// provider connect actions; with data it shows the balance and the
/// transaction history exactly as the backend ordered it.
#[function_component(BankingPanel)]
pub fn banking_panel(props: &BankingPanelProps) -> Html {
    let syncing = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider missing");

    let connect = {
        let syncing = syncing.clone();
        let on_synced = props.on_synced.clone();
        let report_id = props.report_id;
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |provider: BankProvider| {
            if *syncing {
                return;
            }
            let Some(report_id) = report_id else {
                log::warn!("Bank sync requested without a report id");
                return;
            };

            syncing.set(true);

            let syncing = syncing.clone();
            let on_synced = on_synced.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match sync_bank_account(provider, report_id).await {
                    Ok(data) => {
                        syncing.set(false);
                        toast_ctx
                            .show_success(format!("Connected to {}", provider.label()));
                        on_synced.emit(data);
                    }
                    Err(e) => {
                        log::error!("Bank sync failed: {}", e);
                        syncing.set(false);
                        toast_ctx.show_error(SYNC_FAILED_MESSAGE.to_string());
                    }
                }
            });
        })
    };

    let body = match props.banking.as_ref() {
        None => html! {
            <>
                <p class="text-sm text-gray-500 mb-4">
                    {"No bank account connected. Connect a provider to pull in live balances and transactions."}
                </p>
                <div class="flex gap-2">
                    { for BankProvider::ALL.iter().map(|provider| {
                        let provider = *provider;
                        let connect = connect.clone();
                        let onclick = Callback::from(move |_| connect.emit(provider));
                        html! {
                            <button
                                class="btn btn-outline btn-primary"
                                {onclick}
                                disabled={*syncing || props.report_id.is_none()}
                            >
                                {if *syncing {
                                    html! { <span class="loading loading-spinner loading-sm"></span> }
                                } else {
                                    html! { <i class="fas fa-link"></i> }
                                }}
                                {format!(" Connect {}", provider.label())}
                            </button>
                        }
                    })}
                </div>
            </>
        },
        Some(banking) => html! {
            <>
                <div class="flex justify-between items-center mb-4">
                    <div>
                        <div class="text-sm text-gray-500">
                            {format!("Connected via {}", banking.provider)}
                        </div>
                        {if let Some(last_sync) = banking.last_sync.as_ref() {
                            html! { <div class="text-xs text-gray-400">{format!("Last sync: {}", last_sync)}</div> }
                        } else {
                            html! {}
                        }}
                    </div>
                    <div class="text-2xl font-bold">{format_currency(banking.balance)}</div>
                </div>

                {if banking.transactions.is_empty() {
                    html! { <p class="text-sm text-gray-500">{"No transactions reported."}</p> }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>{"Date"}</th>
                                        <th>{"Description"}</th>
                                        <th class="text-right">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for banking.transactions.iter().map(|tx| {
                                        // Sign drives the colour only; the value is shown as-is.
                                        let amount_class = if tx.amount < 0.0 { "text-error" } else { "text-success" };
                                        html! {
                                            <tr>
                                                <td>{tx.date.clone()}</td>
                                                <td>{tx.description.clone()}</td>
                                                <td class={classes!("text-right", amount_class)}>
                                                    {format_currency(tx.amount)}
                                                </td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                }}
            </>
        },
    };

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h3 class="card-title">{"Banking Integration"}</h3>
                {body}
            </div>
        </div>
    }
}
