use std::io::Write;

use robotict_domain::Report;
use robotict_shared_kernel::Result;

pub fn output_json(report: &Report, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
