use std::io::Write;

use robotict_domain::Report;
use robotict_shared_kernel::Result;

use super::{document_title, divisors_line};

const RULE_WIDTH: usize = 50;

/// Plain-text export: headers, a rule, the statistics block, then `<n>: <label>` lines.
pub fn output_text(report: &Report, out: &mut impl Write) -> Result<()> {
    write_text_header(report, out)?;
    write_text_statistics(report, out)?;
    write_text_rows(report, out)?;
    Ok(())
}

fn write_text_header(report: &Report, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", document_title(report))?;
    writeln!(out, "{}", divisors_line(report))?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;
    Ok(())
}

fn write_text_statistics(report: &Report, out: &mut impl Write) -> Result<()> {
    writeln!(out, "STATISTICS:")?;
    for (category, count) in report.statistics.iter() {
        writeln!(out, "{category}: {count}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_text_rows(report: &Report, out: &mut impl Write) -> Result<()> {
    writeln!(out, "NUMBER LIST:")?;
    for (i, row) in report.numbers.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}: {}", row.number, row.label)?;
    }
    Ok(())
}
