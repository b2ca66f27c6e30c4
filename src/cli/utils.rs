// cli/utils.rs

use crate::sched::process::Process;
use crate::sched::timeline::Interval;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Import a process set from a CSV file with `name,arrival,burst[,priority]`
/// headers. A missing priority column defaults to 0.
pub fn import_processes<P: AsRef<Path>>(path: P) -> Result<Vec<Process>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("cannot open {}", path.as_ref().display()))?;

    let mut processes = Vec::new();
    for (n, result) in rdr.deserialize::<Process>().enumerate() {
        let p = result.with_context(|| format!("malformed record {}", n + 1))?;
        if p.burst == 0 {
            bail!("record {}: burst must be positive for process {}", n + 1, p.name);
        }
        processes.push(p);
    }
    if processes.is_empty() {
        bail!("no process records in {}", path.as_ref().display());
    }
    Ok(processes)
}

/// Export a computed timeline as CSV (`name,start,end` per interval).
pub fn export_timeline<P: AsRef<Path>>(chart: &[Interval], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .from_path(&path)
        .with_context(|| format!("cannot create {}", path.as_ref().display()))?;
    for iv in chart {
        wtr.serialize(iv)?;
    }
    wtr.flush()?;
    Ok(())
}
