use clap::Parser;
use papex_site::core::fields::{FIELD_SECTIONS, SOURCES};
use papex_site::core::value_prop::PosValuePropOutputs;
use papex_site::utils::format::{format_count, format_currency, format_pct};
use papex_site::utils::logger;
use papex_site::{calculate_pos_value_prop_model, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting papex-site value-prop calculator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let inputs = config.to_inputs();
    let model = calculate_pos_value_prop_model(&inputs);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    if model.diagnostics.receipt_rates_were_normalized {
        eprintln!(
            "⚠️  Receipt-channel percentages sum to {} — channel volumes were normalized to 100%",
            format_pct(model.diagnostics.receipt_rate_total_pct)
        );
    }

    print_report(&model);

    if config.verbose {
        print_assumptions();
    }

    Ok(())
}

fn print_report(model: &PosValuePropOutputs) {
    let gm = &model.gross_margin;
    let an = &model.analytics;

    println!("📊 Receipt volumes (monthly)");
    println!("  Total transactions      {}", format_count(gm.total_transactions_per_month));
    println!("  Printed receipts        {}", format_count(gm.printed_receipts_per_month));
    println!("  Emailed receipts        {}", format_count(gm.emailed_receipts_per_month));
    println!("  Texted receipts         {}", format_count(gm.texted_receipts_per_month));
    println!("  No receipt              {}", format_count(gm.no_receipt_transactions_per_month));
    println!();

    println!("🧾 Receipt infrastructure costs");
    println!("  Paper (monthly)         {}", format_currency(gm.monthly_paper_receipt_cost));
    println!("  Email (monthly)         {}", format_currency(gm.monthly_email_receipt_cost));
    println!("  SMS (monthly)           {}", format_currency(gm.monthly_sms_receipt_cost));
    println!("  E-receipt (monthly)     {}", format_currency(gm.monthly_pos_receipt_infrastructure_cost));
    println!("  E-receipt (yearly)      {}", format_currency(gm.yearly_pos_receipt_infrastructure_cost));
    println!("  Paper (yearly)          {}", format_currency(gm.yearly_paper_receipt_cost));
    println!("  Combined offset (yearly) {}", format_currency(gm.yearly_combined_receipt_cost_offset_potential));
    println!();

    println!("📈 Customer analytics (per merchant)");
    println!(
        "  Identifiable customers  {} → {} (+{})",
        format_count(an.identifiable_customers_without_papex_per_merchant),
        format_count(an.identifiable_customers_with_papex_per_merchant),
        format_count(an.additional_identifiable_customers_per_merchant)
    );
    println!(
        "  Repeat customers        {} → {}",
        format_count(an.repeat_customers_without_papex_per_merchant),
        format_count(an.repeat_customers_with_papex_per_merchant)
    );
    println!(
        "  Est. repeat spend       {} → {}",
        format_currency(an.estimated_repeat_spend_without_papex_per_merchant),
        format_currency(an.estimated_repeat_spend_with_papex_per_merchant)
    );
    println!();

    println!("💰 Revenue impact");
    println!(
        "  Incremental merchant revenue (monthly) {} → {}",
        format_currency(an.monthly_incremental_merchant_revenue_without_papex),
        format_currency(an.monthly_incremental_merchant_revenue_with_papex)
    );
    println!(
        "  Incremental merchant revenue (yearly)  {} → {}",
        format_currency(an.yearly_incremental_merchant_revenue_without_papex),
        format_currency(an.yearly_incremental_merchant_revenue_with_papex)
    );
    println!(
        "  Added merchant revenue (network)       {} → {}",
        format_currency(an.total_added_merchant_revenue_without_papex),
        format_currency(an.total_added_merchant_revenue_with_papex)
    );
    println!(
        "  Added POS revenue (network)            {} → {}",
        format_currency(an.total_added_pos_revenue_without_papex),
        format_currency(an.total_added_pos_revenue_with_papex)
    );
    println!();
    println!(
        "✅ Additional annual POS revenue with PapeX: {}",
        format_currency(an.additional_annual_pos_revenue_with_papex)
    );
}

fn print_assumptions() {
    println!();
    println!("Editable assumptions:");
    for section in FIELD_SECTIONS {
        println!("  [{}] {}", section.id, section.title);
        for field in section.fields {
            println!("    {:<44} {}", field.key, field.label);
        }
    }
    println!();
    println!("Sources:");
    for source in SOURCES {
        println!("  {} — {} ({})", source.label, source.url, source.note);
    }
}
