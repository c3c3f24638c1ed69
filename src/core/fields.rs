//! Static presentation metadata for the calculator's editable inputs.
//!
//! Consumed only by presentation layers for widget rendering; the model
//! itself never reads these bounds.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Count,
    Currency,
    Percentage,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDef {
    /// camelCase key of the corresponding `PosValuePropInputs` field.
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub unit: Unit,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDef],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Source {
    pub label: &'static str,
    pub url: &'static str,
    pub note: &'static str,
}

pub const FIELD_SECTIONS: &[FieldSection] = &[
    FieldSection {
        id: "scale",
        title: "Business scale assumptions",
        description: "Baseline operating profile for the POS partner network.",
        fields: &[
            FieldDef {
                key: "merchantCount",
                label: "POS merchants",
                description: "Merchants active on the POS platform.",
                unit: Unit::Count,
                min: Some(0.0),
                max: None,
                step: Some(100.0),
            },
            FieldDef {
                key: "transactionsPerMerchantPerMonth",
                label: "Transactions per merchant / month",
                description: "Average monthly transactions handled by each merchant.",
                unit: Unit::Count,
                min: Some(0.0),
                max: None,
                step: Some(10.0),
            },
            FieldDef {
                key: "uniqueCustomersPerMerchantPerMonth",
                label: "Unique customers per merchant / month",
                description: "Estimated unique payers each merchant serves every month.",
                unit: Unit::Count,
                min: Some(0.0),
                max: None,
                step: Some(10.0),
            },
            FieldDef {
                key: "averageOrderValue",
                label: "Average order value",
                description: "Used for customer-value context in the analytics view.",
                unit: Unit::Currency,
                min: Some(0.0),
                max: None,
                step: Some(1.0),
            },
        ],
    },
    FieldSection {
        id: "receipt-mix",
        title: "Receipt mix and infrastructure costs",
        description: "How receipts are currently delivered and what that delivery costs.",
        fields: &[
            FieldDef {
                key: "printedReceiptRatePct",
                label: "Printed receipts",
                description: "Share of transactions that generate a printed receipt.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "emailedReceiptRatePct",
                label: "Emailed receipts",
                description: "Share of transactions that generate an emailed receipt.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "textedReceiptRatePct",
                label: "Texted receipts",
                description: "Share of transactions that generate an SMS receipt.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "noReceiptRatePct",
                label: "No receipt",
                description: "Share of transactions where no receipt is created.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "costPerPrintedReceipt",
                label: "Cost per printed receipt",
                description: "Paper + hardware overhead estimate per printed receipt.",
                unit: Unit::Currency,
                min: Some(0.0),
                max: None,
                step: Some(0.001),
            },
            FieldDef {
                key: "costPerThousandEmails",
                label: "Cost per 1,000 emails",
                description: "Email provider delivery cost estimate.",
                unit: Unit::Currency,
                min: Some(0.0),
                max: None,
                step: Some(0.01),
            },
            FieldDef {
                key: "costPerThousandTexts",
                label: "Cost per 1,000 texts",
                description: "SMS provider delivery cost estimate.",
                unit: Unit::Currency,
                min: Some(0.0),
                max: None,
                step: Some(0.01),
            },
        ],
    },
    FieldSection {
        id: "revenue-analytics",
        title: "Revenue and analytics assumptions",
        description: "Input levers for identity coverage and partner revenue upside.",
        fields: &[
            FieldDef {
                key: "identifiedTransactionRateWithoutPapexPct",
                label: "Identified transaction rate (without PapeX)",
                description: "Percent of transactions tied to an identifiable customer profile.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "identifiedTransactionRateWithPapexPct",
                label: "Identified transaction rate (with PapeX)",
                description: "Expected identifiable coverage after PapeX rollout.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "repeatRatePct",
                label: "Repeat rate",
                description: "Share of identifiable customers who return in period.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldDef {
                key: "monthlyIncrementalMerchantRevenueWithoutPapex",
                label: "Monthly incremental merchant revenue (without PapeX)",
                description: "Current monthly merchant-side incremental revenue baseline.",
                unit: Unit::Currency,
                min: Some(0.0),
                max: None,
                step: Some(100.0),
            },
            FieldDef {
                key: "papexRevenueLiftPct",
                label: "PapeX revenue lift",
                description: "Expected percentage lift in incremental merchant revenue with PapeX.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: None,
                step: Some(0.1),
            },
            FieldDef {
                key: "posRevenueSharePct",
                label: "POS revenue share",
                description: "Portion of added merchant revenue captured by the POS platform.",
                unit: Unit::Percentage,
                min: Some(0.0),
                max: None,
                step: Some(0.1),
            },
        ],
    },
];

pub const SOURCES: &[Source] = &[
    Source {
        label: "SMS pricing (United States)",
        url: "https://www.twilio.com/en-us/sms/pricing/us",
        note: "Reference for cost per 1,000 texts sent.",
    },
    Source {
        label: "Paper receipt survey",
        url: "https://greenamerica.org/paper-receipt-survey",
        note: "Green America survey on paper receipts and customer preferences.",
    },
    Source {
        label: "Email marketing pricing comparison",
        url: "https://research.aimultiple.com/email-marketing-pricing/",
        note: "Reference for email delivery and marketing cost assumptions.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_input_field_is_declared_once() {
        let keys: Vec<&str> = FIELD_SECTIONS
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.key))
            .collect();
        assert_eq!(keys.len(), 17);
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn test_percentage_fields_start_at_zero() {
        for section in FIELD_SECTIONS {
            for field in section.fields {
                assert_eq!(field.min, Some(0.0), "field {} has no zero floor", field.key);
            }
        }
    }
}
