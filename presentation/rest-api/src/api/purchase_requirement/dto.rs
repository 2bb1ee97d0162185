use poem_openapi::Object;

use business::domain::purchase_requirement::model::PurchaseRequirement;
use business::domain::shared::time::{format_date, format_date_time, format_month_year};

#[derive(Debug, Clone, Object)]
pub struct PurchaseRequirementResponse {
    /// Product name
    pub name: String,
    /// Amount to purchase
    pub amount: i64,
    /// Report generation time in epoch milliseconds
    pub time: i64,
}

impl From<PurchaseRequirement> for PurchaseRequirementResponse {
    fn from(requirement: PurchaseRequirement) -> Self {
        Self {
            name: requirement.name,
            amount: requirement.amount,
            time: requirement.time,
        }
    }
}

/// A purchase requirement report. Date fields are absent when the report is empty.
#[derive(Debug, Clone, Object)]
pub struct PurchaseRequirementReportResponse {
    /// Generation time as `dd/MM/yyyy HH:mm:ss` (UTC)
    #[oai(skip_serializing_if_is_none)]
    pub generated_at: Option<String>,
    /// Generation date as `dd/MM/yyyy` (UTC)
    #[oai(skip_serializing_if_is_none)]
    pub generated_on: Option<String>,
    /// Month of generation, e.g. `Mar-24`
    #[oai(skip_serializing_if_is_none)]
    pub period: Option<String>,
    /// Products to purchase, ordered by name
    pub items: Vec<PurchaseRequirementResponse>,
}

impl From<Vec<PurchaseRequirement>> for PurchaseRequirementReportResponse {
    fn from(requirements: Vec<PurchaseRequirement>) -> Self {
        let time = requirements.first().map(|r| r.time);
        Self {
            generated_at: time.and_then(format_date_time),
            generated_on: time.and_then(format_date),
            period: time.and_then(format_month_year),
            items: requirements.into_iter().map(|r| r.into()).collect(),
        }
    }
}
