use pricefetch_core::PriceReport;

use crate::error::CliError;

/// Print the report to stdout in the requested mode.
///
/// JSON mode emits the full record pretty-printed; text mode emits the
/// one-line summary, or the failure message verbatim.
pub fn render(report: &PriceReport, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.text_line());
    }

    Ok(())
}
