use serde::{Deserialize, Serialize};

const YEARLY_MULTIPLIER: f64 = 12.0;
const THOUSAND: f64 = 1000.0;
/// Receipt-mix ratios further than this from 1.0 are flagged as normalized.
const RATE_TOLERANCE: f64 = 0.0001;

/// Business assumptions driving the POS value-proposition model.
///
/// All fields are plain numbers and only meaningful when non-negative;
/// anything negative or non-finite is clamped to zero during calculation,
/// so partially edited UI state can be fed in as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosValuePropInputs {
    pub merchant_count: f64,
    pub transactions_per_merchant_per_month: f64,
    pub unique_customers_per_merchant_per_month: f64,
    pub average_order_value: f64,
    pub printed_receipt_rate_pct: f64,
    pub emailed_receipt_rate_pct: f64,
    pub texted_receipt_rate_pct: f64,
    pub no_receipt_rate_pct: f64,
    pub cost_per_printed_receipt: f64,
    pub cost_per_thousand_emails: f64,
    pub cost_per_thousand_texts: f64,
    pub identified_transaction_rate_without_papex_pct: f64,
    pub identified_transaction_rate_with_papex_pct: f64,
    pub repeat_rate_pct: f64,
    pub monthly_incremental_merchant_revenue_without_papex: f64,
    pub papex_revenue_lift_pct: f64,
    pub pos_revenue_share_pct: f64,
}

impl Default for PosValuePropInputs {
    fn default() -> Self {
        Self {
            merchant_count: 20000.0,
            transactions_per_merchant_per_month: 3000.0,
            unique_customers_per_merchant_per_month: 2000.0,
            average_order_value: 25.0,
            printed_receipt_rate_pct: 45.0,
            emailed_receipt_rate_pct: 35.0,
            texted_receipt_rate_pct: 10.0,
            no_receipt_rate_pct: 10.0,
            cost_per_printed_receipt: 0.03,
            cost_per_thousand_emails: 0.1,
            cost_per_thousand_texts: 10.0,
            identified_transaction_rate_without_papex_pct: 45.0,
            identified_transaction_rate_with_papex_pct: 63.0,
            repeat_rate_pct: 40.0,
            monthly_incremental_merchant_revenue_without_papex: 20000.0,
            papex_revenue_lift_pct: 12.5,
            pos_revenue_share_pct: 0.4,
        }
    }
}

/// Monthly/yearly receipt volumes per delivery channel and what that
/// delivery costs the POS platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrossMarginOutputs {
    pub total_transactions_per_month: f64,
    pub printed_receipts_per_month: f64,
    pub emailed_receipts_per_month: f64,
    pub texted_receipts_per_month: f64,
    pub no_receipt_transactions_per_month: f64,
    pub monthly_paper_receipt_cost: f64,
    pub monthly_email_receipt_cost: f64,
    pub monthly_sms_receipt_cost: f64,
    pub monthly_pos_receipt_infrastructure_cost: f64,
    pub yearly_pos_receipt_infrastructure_cost: f64,
    pub yearly_paper_receipt_cost: f64,
    pub yearly_combined_receipt_cost_offset_potential: f64,
}

/// Identity coverage and revenue upside, each as a without/with PapeX pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOutputs {
    pub identifiable_customers_without_papex_per_merchant: f64,
    pub identifiable_customers_with_papex_per_merchant: f64,
    pub additional_identifiable_customers_per_merchant: f64,
    pub repeat_customers_without_papex_per_merchant: f64,
    pub repeat_customers_with_papex_per_merchant: f64,
    pub estimated_repeat_spend_without_papex_per_merchant: f64,
    pub estimated_repeat_spend_with_papex_per_merchant: f64,
    pub monthly_incremental_merchant_revenue_without_papex: f64,
    pub monthly_incremental_merchant_revenue_with_papex: f64,
    pub yearly_incremental_merchant_revenue_without_papex: f64,
    pub yearly_incremental_merchant_revenue_with_papex: f64,
    pub total_added_merchant_revenue_without_papex: f64,
    pub total_added_merchant_revenue_with_papex: f64,
    pub total_added_pos_revenue_without_papex: f64,
    pub total_added_pos_revenue_with_papex: f64,
    pub additional_annual_pos_revenue_with_papex: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsOutputs {
    /// Raw sum of the four receipt-channel percentages as entered.
    pub receipt_rate_total_pct: f64,
    /// True when the raw sum deviated from 100 and the channel shares were
    /// renormalized before computing volumes.
    pub receipt_rates_were_normalized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosValuePropOutputs {
    pub gross_margin: GrossMarginOutputs,
    pub analytics: AnalyticsOutputs,
    pub diagnostics: DiagnosticsOutputs,
}

fn clamp_to_zero(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn to_ratio(percent: f64) -> f64 {
    clamp_to_zero(percent) / 100.0
}

/// Projects the revenue impact of PapeX receipt digitization across a POS
/// merchant network.
///
/// Pure and total: never fails, never panics, performs no I/O. Negative or
/// non-finite inputs are treated as zero, and the four receipt-channel shares
/// are renormalized to sum to 1 before volumes are attributed (the raw sum is
/// reported back in `diagnostics` so callers can warn the user).
pub fn calculate_pos_value_prop_model(inputs: &PosValuePropInputs) -> PosValuePropOutputs {
    let merchants = clamp_to_zero(inputs.merchant_count);
    let transactions_per_merchant_per_month =
        clamp_to_zero(inputs.transactions_per_merchant_per_month);
    let unique_customers_per_merchant_per_month =
        clamp_to_zero(inputs.unique_customers_per_merchant_per_month);
    let average_order_value = clamp_to_zero(inputs.average_order_value);

    let printed_rate = to_ratio(inputs.printed_receipt_rate_pct);
    let emailed_rate = to_ratio(inputs.emailed_receipt_rate_pct);
    let texted_rate = to_ratio(inputs.texted_receipt_rate_pct);
    let no_receipt_rate = to_ratio(inputs.no_receipt_rate_pct);

    let receipt_rate_total = printed_rate + emailed_rate + texted_rate + no_receipt_rate;
    let should_normalize_rates =
        receipt_rate_total > 0.0 && (receipt_rate_total - 1.0).abs() > RATE_TOLERANCE;
    // Zero mix falls back to a divisor of 1: no channel attribution at all.
    let divisor = if receipt_rate_total > 0.0 {
        receipt_rate_total
    } else {
        1.0
    };

    let total_transactions_per_month = merchants * transactions_per_merchant_per_month;
    let printed_receipts_per_month = total_transactions_per_month * (printed_rate / divisor);
    let emailed_receipts_per_month = total_transactions_per_month * (emailed_rate / divisor);
    let texted_receipts_per_month = total_transactions_per_month * (texted_rate / divisor);
    let no_receipt_transactions_per_month =
        total_transactions_per_month * (no_receipt_rate / divisor);

    let monthly_paper_receipt_cost =
        printed_receipts_per_month * clamp_to_zero(inputs.cost_per_printed_receipt);
    let monthly_email_receipt_cost =
        (emailed_receipts_per_month / THOUSAND) * clamp_to_zero(inputs.cost_per_thousand_emails);
    let monthly_sms_receipt_cost =
        (texted_receipts_per_month / THOUSAND) * clamp_to_zero(inputs.cost_per_thousand_texts);
    // Paper is reported separately; the infrastructure subtotal is e-receipt only.
    let monthly_pos_receipt_infrastructure_cost =
        monthly_email_receipt_cost + monthly_sms_receipt_cost;
    let yearly_pos_receipt_infrastructure_cost =
        monthly_pos_receipt_infrastructure_cost * YEARLY_MULTIPLIER;
    let yearly_paper_receipt_cost = monthly_paper_receipt_cost * YEARLY_MULTIPLIER;

    let identified_without_ratio = to_ratio(inputs.identified_transaction_rate_without_papex_pct);
    let identified_with_ratio = to_ratio(inputs.identified_transaction_rate_with_papex_pct);
    let repeat_ratio = to_ratio(inputs.repeat_rate_pct);
    let monthly_incremental_merchant_revenue_without_papex =
        clamp_to_zero(inputs.monthly_incremental_merchant_revenue_without_papex);
    let papex_revenue_lift_ratio = to_ratio(inputs.papex_revenue_lift_pct);
    let pos_revenue_share_ratio = to_ratio(inputs.pos_revenue_share_pct);

    let identifiable_customers_without_papex_per_merchant =
        unique_customers_per_merchant_per_month * identified_without_ratio;
    let identifiable_customers_with_papex_per_merchant =
        unique_customers_per_merchant_per_month * identified_with_ratio;
    let additional_identifiable_customers_per_merchant =
        identifiable_customers_with_papex_per_merchant
            - identifiable_customers_without_papex_per_merchant;

    // Repeat rate is not assumed to change with the product.
    let repeat_customers_without_papex_per_merchant =
        identifiable_customers_without_papex_per_merchant * repeat_ratio;
    let repeat_customers_with_papex_per_merchant =
        identifiable_customers_with_papex_per_merchant * repeat_ratio;
    let estimated_repeat_spend_without_papex_per_merchant =
        repeat_customers_without_papex_per_merchant * average_order_value;
    let estimated_repeat_spend_with_papex_per_merchant =
        repeat_customers_with_papex_per_merchant * average_order_value;

    let monthly_incremental_merchant_revenue_with_papex =
        monthly_incremental_merchant_revenue_without_papex * (1.0 + papex_revenue_lift_ratio);

    let yearly_incremental_merchant_revenue_without_papex =
        monthly_incremental_merchant_revenue_without_papex * YEARLY_MULTIPLIER;
    let yearly_incremental_merchant_revenue_with_papex =
        monthly_incremental_merchant_revenue_with_papex * YEARLY_MULTIPLIER;

    let total_added_merchant_revenue_without_papex =
        yearly_incremental_merchant_revenue_without_papex * merchants;
    let total_added_merchant_revenue_with_papex =
        yearly_incremental_merchant_revenue_with_papex * merchants;

    let total_added_pos_revenue_without_papex =
        total_added_merchant_revenue_without_papex * pos_revenue_share_ratio;
    let total_added_pos_revenue_with_papex =
        total_added_merchant_revenue_with_papex * pos_revenue_share_ratio;

    PosValuePropOutputs {
        gross_margin: GrossMarginOutputs {
            total_transactions_per_month,
            printed_receipts_per_month,
            emailed_receipts_per_month,
            texted_receipts_per_month,
            no_receipt_transactions_per_month,
            monthly_paper_receipt_cost,
            monthly_email_receipt_cost,
            monthly_sms_receipt_cost,
            monthly_pos_receipt_infrastructure_cost,
            yearly_pos_receipt_infrastructure_cost,
            yearly_paper_receipt_cost,
            yearly_combined_receipt_cost_offset_potential: yearly_paper_receipt_cost
                + yearly_pos_receipt_infrastructure_cost,
        },
        analytics: AnalyticsOutputs {
            identifiable_customers_without_papex_per_merchant,
            identifiable_customers_with_papex_per_merchant,
            additional_identifiable_customers_per_merchant,
            repeat_customers_without_papex_per_merchant,
            repeat_customers_with_papex_per_merchant,
            estimated_repeat_spend_without_papex_per_merchant,
            estimated_repeat_spend_with_papex_per_merchant,
            monthly_incremental_merchant_revenue_without_papex,
            monthly_incremental_merchant_revenue_with_papex,
            yearly_incremental_merchant_revenue_without_papex,
            yearly_incremental_merchant_revenue_with_papex,
            total_added_merchant_revenue_without_papex,
            total_added_merchant_revenue_with_papex,
            total_added_pos_revenue_without_papex,
            total_added_pos_revenue_with_papex,
            additional_annual_pos_revenue_with_papex: total_added_pos_revenue_with_papex
                - total_added_pos_revenue_without_papex,
        },
        diagnostics: DiagnosticsOutputs {
            receipt_rate_total_pct: receipt_rate_total * 100.0,
            receipt_rates_were_normalized: should_normalize_rates,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_zero() {
        assert_eq!(clamp_to_zero(5.0), 5.0);
        assert_eq!(clamp_to_zero(-3.0), 0.0);
        assert_eq!(clamp_to_zero(f64::NAN), 0.0);
        assert_eq!(clamp_to_zero(f64::INFINITY), 0.0);
        assert_eq!(clamp_to_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_to_ratio() {
        assert_eq!(to_ratio(45.0), 0.45);
        assert_eq!(to_ratio(-10.0), 0.0);
        assert_eq!(to_ratio(f64::NAN), 0.0);
        // No upper clamp: >100% lift is a legitimate "more than double".
        assert_eq!(to_ratio(250.0), 2.5);
    }

    #[test]
    fn test_defaults_match_baseline_profile() {
        let d = PosValuePropInputs::default();
        assert_eq!(d.merchant_count, 20000.0);
        assert_eq!(d.cost_per_thousand_texts, 10.0);
        assert_eq!(d.repeat_rate_pct, 40.0);
        assert_eq!(d.pos_revenue_share_pct, 0.4);
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let outputs = calculate_pos_value_prop_model(&PosValuePropInputs::default());
        let json = serde_json::to_value(outputs).unwrap();
        assert!(json["grossMargin"]["totalTransactionsPerMonth"].is_number());
        assert!(json["analytics"]["additionalAnnualPosRevenueWithPapeX"].is_null());
        assert!(json["analytics"]["additionalAnnualPosRevenueWithPapex"].is_number());
        assert!(json["diagnostics"]["receiptRatesWereNormalized"].is_boolean());
    }
}
