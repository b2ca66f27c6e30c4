// cli/parse.rs

use crate::paging::policy::ReplacementPolicy;
use crate::sched::engine::SchedulingPolicy;
use crate::sched::process::Process;
use anyhow::{Context, Result, bail};

/// Parse a whitespace-separated reference string, e.g. `"1 2 3 4 1 2 5"`.
pub fn reference_string(input: &str) -> Result<Vec<u64>> {
    let pages = input
        .split_whitespace()
        .map(|tok| {
            tok.parse::<u64>()
                .with_context(|| format!("invalid page number '{tok}'"))
        })
        .collect::<Result<Vec<u64>>>()?;
    if pages.is_empty() {
        bail!("reference string must not be empty");
    }
    Ok(pages)
}

/// Parse one `name arrival burst [priority]` record.
pub fn process_line(line: &str) -> Result<Process> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 || parts.len() > 4 {
        bail!("expected 'name arrival burst [priority]', got '{line}'");
    }
    let name = parts[0].to_string();
    let arrival: i64 = parts[1]
        .parse()
        .with_context(|| format!("invalid arrival '{}' for process {name}", parts[1]))?;
    if arrival < 0 {
        bail!("arrival must be non-negative for process {name}");
    }
    let burst: i64 = parts[2]
        .parse()
        .with_context(|| format!("invalid burst '{}' for process {name}", parts[2]))?;
    if burst <= 0 {
        bail!("burst must be positive for process {name}");
    }
    let priority = match parts.get(3) {
        Some(tok) => tok
            .parse::<i64>()
            .with_context(|| format!("invalid priority '{tok}' for process {name}"))?,
        None => 0,
    };
    Ok(Process::with_priority(name, arrival as u64, burst as u64, priority))
}

/// Parse a process set from newline- or semicolon-separated records.
pub fn process_list(input: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    for (n, line) in input
        .split(|c| c == '\n' || c == ';')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
    {
        let p = process_line(line).with_context(|| format!("record {}", n + 1))?;
        processes.push(p);
    }
    if processes.is_empty() {
        bail!("process set must not be empty");
    }
    Ok(processes)
}

pub fn replacement_policy(name: &str) -> Result<ReplacementPolicy> {
    match name.to_ascii_uppercase().as_str() {
        "FIFO" => Ok(ReplacementPolicy::Fifo),
        "LRU" => Ok(ReplacementPolicy::Lru),
        "OPT" => Ok(ReplacementPolicy::Opt),
        other => bail!("unknown replacement policy '{other}' (expected FIFO, LRU or OPT)"),
    }
}

/// Map a policy name and optional quantum onto a `SchedulingPolicy`.
/// The quantum is required for RR and rejected elsewhere.
pub fn scheduling_policy(name: &str, quantum: Option<u64>) -> Result<SchedulingPolicy> {
    let policy = match name.to_ascii_uppercase().as_str() {
        "FCFS" => SchedulingPolicy::Fcfs,
        "SJF" => SchedulingPolicy::Sjf,
        "SRTF" => SchedulingPolicy::Srtf,
        "RR" => {
            let quantum =
                quantum.context("round-robin requires a quantum, e.g. 'sched RR 2 ...'")?;
            return Ok(SchedulingPolicy::RoundRobin { quantum });
        }
        "PRIORITY" => SchedulingPolicy::Priority,
        other => {
            bail!("unknown scheduling policy '{other}' (expected FCFS, SJF, RR, SRTF or PRIORITY)")
        }
    };
    if quantum.is_some() {
        bail!("quantum only applies to round-robin");
    }
    Ok(policy)
}
