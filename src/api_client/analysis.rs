use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::api_client::{self, ApiError};
use crate::api_client::banking::BankingData;

/// Report language requested from the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Wire tag used as the `language` query parameter.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi (हिंदी)",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }
}

/// One analysed dimension of the business (revenue, payables, ...).
/// The backend may attach extra detail per dimension; only the total is
/// rendered, so everything else is ignored on decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FinancialBucket {
    #[serde(default)]
    pub total: f64,
}

/// Revenue bucket with its per-category breakdown for the pie chart.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct RevenueStreams {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
}

/// The backend has emitted `key_metrics` both as an object and as a bare
/// net-profit number; both shapes decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum KeyMetrics {
    Detailed {
        #[serde(default)]
        net_profit: f64,
    },
    Plain(f64),
}

impl KeyMetrics {
    pub fn net_profit(&self) -> f64 {
        match self {
            KeyMetrics::Detailed { net_profit } => *net_profit,
            KeyMetrics::Plain(value) => *value,
        }
    }
}

/// Credit score estimate, numeric or already formatted by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CreditScore {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for CreditScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditScore::Number(n) => write!(f, "{}", n),
            CreditScore::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Financial analysis report returned by the backend.
///
/// Every field is optional: a partially populated report renders with zeros
/// and blanks, it never fails to decode. Once received the report is treated
/// as immutable; only `banking_data` is replaced after a provider sync.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FinancialReport {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub revenue_streams: Option<RevenueStreams>,
    #[serde(default)]
    pub cost_structure: Option<FinancialBucket>,
    #[serde(default)]
    pub accounts_receivable: Option<FinancialBucket>,
    #[serde(default)]
    pub accounts_payable: Option<FinancialBucket>,
    #[serde(default)]
    pub inventory_levels: Option<FinancialBucket>,
    #[serde(default)]
    pub loan_obligations: Option<FinancialBucket>,
    #[serde(default)]
    pub tax_compliance: Option<FinancialBucket>,

    #[serde(default)]
    pub key_metrics: Option<KeyMetrics>,
    #[serde(default)]
    pub risk_assessment: Option<String>,
    #[serde(default)]
    pub credit_score_estimate: Option<CreditScore>,
    #[serde(default)]
    pub recommendations: Vec<String>,

    #[serde(default)]
    pub banking_data: Option<BankingData>,
}

impl FinancialReport {
    pub fn net_profit(&self) -> f64 {
        self.key_metrics.as_ref().map_or(0.0, KeyMetrics::net_profit)
    }

    /// Exactly "Low" counts as low risk; any other label, or none, is
    /// rendered with the high-risk style. There is no middle tier.
    pub fn is_low_risk(&self) -> bool {
        self.risk_assessment.as_deref() == Some("Low")
    }
}

/// Upload a financial statement for analysis.
///
/// Posts the file as the multipart field `file` and returns the decoded
/// report. Any network failure or non-success status surfaces as a single
/// `ApiError`; there is no retry.
pub async fn upload_financial_file(
    file: &File,
    language: Language,
) -> Result<FinancialReport, ApiError> {
    log::debug!(
        "Uploading financial file '{}' ({} bytes, language={})",
        file.name(),
        file.size(),
        language.tag()
    );

    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let endpoint = format!("/analysis/upload?language={}", language.tag());
    let result: Result<FinancialReport, ApiError> =
        api_client::post_multipart(&endpoint, form).await;
    match &result {
        Ok(report) => log::info!(
            "Analysis complete for '{}' (report id: {:?})",
            file.name(),
            report.id
        ),
        Err(e) => log::error!("Failed to analyse '{}': {}", file.name(), e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_report_decodes_unchanged() {
        let body = serde_json::json!({
            "filename": "q2-ledger.csv",
            "revenue_streams": { "total": 1000, "categories": { "Sales": 700, "Services": 300 } },
            "risk_assessment": "Low",
            "key_metrics": { "net_profit": 200 },
            "credit_score_estimate": 720,
            "recommendations": ["Reduce overhead"]
        });

        let report: FinancialReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.filename.as_deref(), Some("q2-ledger.csv"));
        let revenue = report.revenue_streams.as_ref().unwrap();
        assert_eq!(revenue.total, 1000.0);
        assert_eq!(revenue.categories.len(), 2);
        assert_eq!(revenue.categories["Sales"], 700.0);
        assert_eq!(revenue.categories["Services"], 300.0);
        assert!(report.is_low_risk());
        assert_eq!(report.net_profit(), 200.0);
        assert_eq!(report.credit_score_estimate.unwrap().to_string(), "720");
        assert_eq!(report.recommendations, vec!["Reduce overhead".to_string()]);
    }

    #[test]
    fn empty_report_decodes_to_defaults() {
        let report: FinancialReport = serde_json::from_str("{}").unwrap();
        assert!(report.revenue_streams.is_none());
        assert!(report.banking_data.is_none());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.net_profit(), 0.0);
        assert!(!report.is_low_risk());
    }

    #[test]
    fn key_metrics_accepts_both_shapes() {
        let detailed: KeyMetrics = serde_json::from_str(r#"{"net_profit": 42.5}"#).unwrap();
        assert_eq!(detailed.net_profit(), 42.5);

        let plain: KeyMetrics = serde_json::from_str("42.5").unwrap();
        assert_eq!(plain.net_profit(), 42.5);
    }

    #[test]
    fn credit_score_accepts_number_or_string() {
        let numeric: CreditScore = serde_json::from_str("680").unwrap();
        assert_eq!(numeric.to_string(), "680");

        let text: CreditScore = serde_json::from_str(r#""A+ (excellent)""#).unwrap();
        assert_eq!(text.to_string(), "A+ (excellent)");
    }

    #[test]
    fn risk_classification_is_binary() {
        for label in ["Medium", "High", "low", "LOW", ""] {
            let report = FinancialReport {
                risk_assessment: Some(label.to_string()),
                ..Default::default()
            };
            assert!(!report.is_low_risk(), "label {:?} must not be low risk", label);
        }

        let missing = FinancialReport::default();
        assert!(!missing.is_low_risk());
    }

    #[test]
    fn language_tags_round_trip() {
        assert_eq!(Language::from_tag(Language::En.tag()), Language::En);
        assert_eq!(Language::from_tag(Language::Hi.tag()), Language::Hi);
        assert_eq!(Language::from_tag("unknown"), Language::En);
    }
}
