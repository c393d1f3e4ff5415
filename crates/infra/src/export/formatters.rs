pub mod delimited;
pub mod structured;
pub mod text;

pub use delimited::output_delimited;
pub use structured::output_json;
pub use text::output_text;

use robotict_domain::Report;

fn document_title(report: &Report) -> String {
    format!("RobotICT Validator - Range {}", report.range)
}

fn divisors_line(report: &Report) -> String {
    format!("Divisors: {} and {}", report.divisors.first(), report.divisors.second())
}
