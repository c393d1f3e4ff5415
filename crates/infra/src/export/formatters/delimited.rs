use std::io::Write;

use robotict_domain::{ClassifiedNumber, Report};
use robotict_shared_kernel::Result;

use super::{document_title, divisors_line};

/// CSV export: metadata lines, a `category,count` block, then one row per number.
pub fn output_delimited(report: &Report, sep: char, out: &mut impl Write) -> Result<()> {
    write_delimited_metadata(report, sep, out)?;
    write_delimited_header(report, sep, out)?;
    write_delimited_rows(report, sep, out)?;
    Ok(())
}

fn write_delimited_metadata(report: &Report, sep: char, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", document_title(report))?;
    writeln!(out, "{}", divisors_line(report))?;
    writeln!(out)?;
    writeln!(out, "STATISTICS")?;
    for (category, count) in report.statistics.iter() {
        writeln!(out, "{category}{sep}{count}")?;
    }
    writeln!(out)?;
    writeln!(out, "NUMBER LIST")?;
    Ok(())
}

fn write_delimited_header(report: &Report, sep: char, out: &mut impl Write) -> Result<()> {
    let (first, second) = (report.divisors.first(), report.divisors.second());
    writeln!(out, "Number{sep}Divisible by {first}{sep}Divisible by {second}{sep}Divisible by both{sep}Label")?;
    Ok(())
}

fn write_delimited_rows(report: &Report, sep: char, out: &mut impl Write) -> Result<()> {
    for (i, row) in report.numbers.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_delimited_row(row, sep, out)?;
    }
    Ok(())
}

fn write_delimited_row(row: &ClassifiedNumber, sep: char, out: &mut impl Write) -> Result<()> {
    write!(
        out,
        "{}{sep}{}{sep}{}{sep}{}{sep}{}",
        row.number,
        yes_no(row.divisible_by_first),
        yes_no(row.divisible_by_second),
        yes_no(row.divisible_by_both()),
        row.label
    )?;
    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
