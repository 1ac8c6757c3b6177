//! The analyze command handler and its rendering.

use crate::commands::Out;
use crate::report::{self, Report, MINIMUM_PAYMENT_PERCENT};
use crate::{Config, Result};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

const WIDTH: usize = 60;

/// Reads every transaction and reports spending by category, total spending and the minimum
/// payment due.
///
/// # Errors
///
/// - `NotFound`, `Schema`, `Format` or `Io` from reading the file. No report is produced if any
///   row fails to parse.
/// - `Format` if the totals are too large to compute.
pub fn analyze(config: Config) -> Result<Out<Report>> {
    let transactions = config.store().read_all()?;
    let report = report::analyze(transactions)?;
    let message = render(&report, Local::now().date_naive());
    Ok(Out::new(message, report))
}

/// Formats an amount with two decimal places.
pub(crate) fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn render(report: &Report, today: NaiveDate) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    let mut lines = vec![
        heavy.clone(),
        "CREDIT CARD SPENDING ANALYSIS".to_string(),
        heavy.clone(),
        String::new(),
        format!("Analysis Date: {}", today.format("%Y-%m-%d")),
        format!("Total Transactions: {}", report.transactions().len()),
        String::new(),
        light.clone(),
        "SPENDING BY CATEGORY".to_string(),
        light.clone(),
    ];

    for share in report.breakdown() {
        let percentage = format!("{:.1}", share.percentage().round_dp(1));
        lines.push(format!(
            "{:.<30} {:>10} ({:>5}%)",
            share.category(),
            money(share.total()),
            percentage
        ));
    }

    lines.push(light);
    lines.push(format!(
        "{:.<30} {:>10}",
        "TOTAL SPENDING",
        money(report.total_spending())
    ));
    lines.push(heavy.clone());
    lines.push(String::new());
    lines.push(format!(
        "MINIMUM PAYMENT DUE ({MINIMUM_PAYMENT_PERCENT}%): {}",
        money(report.minimum_payment())
    ));
    lines.push(format!("FULL BALANCE: {}", money(report.total_spending())));
    lines.push(heavy);
    lines.join("\n")
}
