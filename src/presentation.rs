// src/presentation.rs
use std::io::{self, Write};

use robotict_domain::{NumberRange, ProbeOutcome, Report};
use robotict_usecase::ClassificationOutput;

const RULE: &str = "----------------------------------------------";

/// Render the terminal table: probe decision, statistics and the classified list.
pub fn render_table(output: &ClassificationOutput, out: &mut impl Write) -> io::Result<()> {
    let report = &output.report;
    writeln!(
        out,
        "robotict v{} · range {} · divisors {}/{}",
        crate::VERSION,
        report.range,
        report.divisors.first(),
        report.divisors.second()
    )?;
    writeln!(out)?;

    if let Some(probe) = &output.probe {
        print_probe(probe, report.range, out)?;
        writeln!(out)?;
    }

    print_statistics(report, out)?;
    writeln!(out)?;
    print_numbers(report, out)?;

    writeln!(out)?;
    writeln!(out, "[robotict] {} numbers classified.", report.len())
}

fn print_probe(probe: &ProbeOutcome, range: NumberRange, out: &mut impl Write) -> io::Result<()> {
    match *probe {
        ProbeOutcome::InRange { number, label } => writeln!(out, "Probe {number}: {label}"),
        ProbeOutcome::BelowMin { number, .. } | ProbeOutcome::AboveMax { number, .. } => writeln!(
            out,
            "Probe {number}: enter a number in range {} to {}",
            range.min(),
            range.max()
        ),
    }
}

fn print_statistics(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "    COUNT     CATEGORY")?;
    writeln!(out, "{RULE}")?;
    for (category, count) in report.statistics.iter() {
        writeln!(out, "{:>9}     {}", count.value(), category)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{:>9}     TOTAL", report.statistics.total().value())
}

fn print_numbers(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "   NUMBER     LABEL")?;
    writeln!(out, "{RULE}")?;
    for row in &report.numbers {
        writeln!(out, "{:>9}     {}", row.number, row.label)?;
    }
    Ok(())
}
