use crate::core::value_prop::PosValuePropInputs;
use clap::Parser;

/// CLI front end for the value-proposition calculator. Every model input can
/// be overridden from the baseline profile.
#[derive(Debug, Clone, Parser)]
#[command(name = "papex-site")]
#[command(about = "POS value-proposition calculator for the PapeX receipt network")]
pub struct CliConfig {
    #[arg(long, help = "Merchants active on the POS platform")]
    pub merchant_count: Option<f64>,

    #[arg(long, help = "Average monthly transactions per merchant")]
    pub transactions_per_merchant_per_month: Option<f64>,

    #[arg(long, help = "Unique payers per merchant per month")]
    pub unique_customers_per_merchant_per_month: Option<f64>,

    #[arg(long, help = "Average order value in USD")]
    pub average_order_value: Option<f64>,

    #[arg(long, help = "Share of transactions with a printed receipt (%)")]
    pub printed_receipt_rate_pct: Option<f64>,

    #[arg(long, help = "Share of transactions with an emailed receipt (%)")]
    pub emailed_receipt_rate_pct: Option<f64>,

    #[arg(long, help = "Share of transactions with an SMS receipt (%)")]
    pub texted_receipt_rate_pct: Option<f64>,

    #[arg(long, help = "Share of transactions with no receipt (%)")]
    pub no_receipt_rate_pct: Option<f64>,

    #[arg(long, help = "Cost per printed receipt in USD")]
    pub cost_per_printed_receipt: Option<f64>,

    #[arg(long, help = "Delivery cost per 1,000 emails in USD")]
    pub cost_per_thousand_emails: Option<f64>,

    #[arg(long, help = "Delivery cost per 1,000 texts in USD")]
    pub cost_per_thousand_texts: Option<f64>,

    #[arg(long, help = "Identified transaction rate without PapeX (%)")]
    pub identified_rate_without_papex_pct: Option<f64>,

    #[arg(long, help = "Identified transaction rate with PapeX (%)")]
    pub identified_rate_with_papex_pct: Option<f64>,

    #[arg(long, help = "Share of identified customers who return in period (%)")]
    pub repeat_rate_pct: Option<f64>,

    #[arg(long, help = "Baseline monthly incremental merchant revenue in USD")]
    pub monthly_incremental_revenue_without_papex: Option<f64>,

    #[arg(long, help = "Revenue lift attributable to PapeX (%)")]
    pub papex_revenue_lift_pct: Option<f64>,

    #[arg(long, help = "POS platform share of added merchant revenue (%)")]
    pub pos_revenue_share_pct: Option<f64>,

    #[arg(long, help = "Emit the full output record as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges CLI overrides over the baseline assumption profile.
    pub fn to_inputs(&self) -> PosValuePropInputs {
        let d = PosValuePropInputs::default();
        PosValuePropInputs {
            merchant_count: self.merchant_count.unwrap_or(d.merchant_count),
            transactions_per_merchant_per_month: self
                .transactions_per_merchant_per_month
                .unwrap_or(d.transactions_per_merchant_per_month),
            unique_customers_per_merchant_per_month: self
                .unique_customers_per_merchant_per_month
                .unwrap_or(d.unique_customers_per_merchant_per_month),
            average_order_value: self.average_order_value.unwrap_or(d.average_order_value),
            printed_receipt_rate_pct: self
                .printed_receipt_rate_pct
                .unwrap_or(d.printed_receipt_rate_pct),
            emailed_receipt_rate_pct: self
                .emailed_receipt_rate_pct
                .unwrap_or(d.emailed_receipt_rate_pct),
            texted_receipt_rate_pct: self
                .texted_receipt_rate_pct
                .unwrap_or(d.texted_receipt_rate_pct),
            no_receipt_rate_pct: self.no_receipt_rate_pct.unwrap_or(d.no_receipt_rate_pct),
            cost_per_printed_receipt: self
                .cost_per_printed_receipt
                .unwrap_or(d.cost_per_printed_receipt),
            cost_per_thousand_emails: self
                .cost_per_thousand_emails
                .unwrap_or(d.cost_per_thousand_emails),
            cost_per_thousand_texts: self
                .cost_per_thousand_texts
                .unwrap_or(d.cost_per_thousand_texts),
            identified_transaction_rate_without_papex_pct: self
                .identified_rate_without_papex_pct
                .unwrap_or(d.identified_transaction_rate_without_papex_pct),
            identified_transaction_rate_with_papex_pct: self
                .identified_rate_with_papex_pct
                .unwrap_or(d.identified_transaction_rate_with_papex_pct),
            repeat_rate_pct: self.repeat_rate_pct.unwrap_or(d.repeat_rate_pct),
            monthly_incremental_merchant_revenue_without_papex: self
                .monthly_incremental_revenue_without_papex
                .unwrap_or(d.monthly_incremental_merchant_revenue_without_papex),
            papex_revenue_lift_pct: self
                .papex_revenue_lift_pct
                .unwrap_or(d.papex_revenue_lift_pct),
            pos_revenue_share_pct: self
                .pos_revenue_share_pct
                .unwrap_or(d.pos_revenue_share_pct),
        }
    }
}
