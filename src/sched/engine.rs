// sched/engine.rs

use crate::sched::process::{Process, ProcessState};
use crate::sched::timeline::Interval;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// CPU-scheduling policies supported by the simulator. Round-Robin carries
/// its quantum so a policy value fully determines a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingPolicy {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin { quantum: u64 },
    Priority,
}

/// Per-run bookkeeping for one process.
struct Job {
    process: Process,
    remaining: u64,
    state: ProcessState,
}

/// Run a scheduling simulation and return the execution intervals in
/// dispatch order, in absolute simulated time.
///
/// The engine never emits idle blocks; when nothing is ready it jumps
/// straight to the next arrival. Idle-gap insertion is a presentation
/// concern (`timeline::with_idle_gaps`). Round-Robin slices are left
/// unmerged; the other policies produce one interval per uninterrupted run.
pub fn run(processes: &[Process], policy: SchedulingPolicy) -> Result<Vec<Interval>> {
    if processes.is_empty() {
        bail!("process set must not be empty");
    }
    let mut seen = HashSet::new();
    for p in processes {
        if p.burst == 0 {
            bail!("process '{}' has zero burst; burst must be positive", p.name);
        }
        if !seen.insert(p.name.as_str()) {
            bail!("duplicate process name '{}'", p.name);
        }
    }
    if let SchedulingPolicy::RoundRobin { quantum } = policy {
        if quantum == 0 {
            bail!("round-robin quantum must be positive");
        }
    }

    let mut jobs: Vec<Job> = processes
        .iter()
        .map(|p| Job {
            process: p.clone(),
            remaining: p.burst,
            state: ProcessState::Unarrived,
        })
        .collect();

    let chart = match policy {
        SchedulingPolicy::Fcfs => fcfs(&mut jobs),
        SchedulingPolicy::Sjf => sjf(&mut jobs),
        SchedulingPolicy::Srtf => srtf(&mut jobs),
        SchedulingPolicy::RoundRobin { quantum } => round_robin(&mut jobs, quantum),
        SchedulingPolicy::Priority => priority(&mut jobs),
    };

    debug_assert!(jobs.iter().all(|j| j.state == ProcessState::Finished));
    Ok(chart)
}

/// Job indices sorted by arrival; the stable sort keeps input order on ties.
fn arrival_order(jobs: &[Job]) -> VecDeque<usize> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by_key(|&i| jobs[i].process.arrival);
    order.into()
}

/// Move every pending job with `arrival <= time` into the ready queue.
fn admit(jobs: &mut [Job], pending: &mut VecDeque<usize>, ready: &mut VecDeque<usize>, time: u64) {
    while let Some(&i) = pending.front() {
        if jobs[i].process.arrival > time {
            break;
        }
        jobs[i].state = ProcessState::Ready;
        ready.push_back(pending.pop_front().expect("front checked"));
    }
}

fn fcfs(jobs: &mut [Job]) -> Vec<Interval> {
    let mut pending = arrival_order(jobs);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut chart = Vec::with_capacity(jobs.len());
    let mut time = 0;

    while !pending.is_empty() || !ready.is_empty() {
        admit(jobs, &mut pending, &mut ready, time);
        if ready.is_empty() {
            time = jobs[*pending.front().expect("pending non-empty")].process.arrival;
            continue;
        }
        // Arrival order, ties by input order; runs to completion.
        let i = ready.pop_front().expect("ready non-empty");
        let job = &mut jobs[i];
        job.state = ProcessState::Running;
        debug!(name = %job.process.name, time, "fcfs dispatch");
        chart.push(Interval::new(job.process.name.clone(), time, time + job.remaining));
        time += job.remaining;
        job.remaining = 0;
        job.state = ProcessState::Finished;
    }
    chart
}

fn sjf(jobs: &mut [Job]) -> Vec<Interval> {
    let mut pending = arrival_order(jobs);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut chart = Vec::with_capacity(jobs.len());
    let mut time = 0;

    while !pending.is_empty() || !ready.is_empty() {
        admit(jobs, &mut pending, &mut ready, time);
        if ready.is_empty() {
            time = jobs[*pending.front().expect("pending non-empty")].process.arrival;
            continue;
        }
        // Shortest burst first; ties by arrival, then input order.
        let pos = ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| (jobs[i].remaining, jobs[i].process.arrival, i))
            .map(|(pos, _)| pos)
            .expect("ready non-empty");
        let i = ready.remove(pos).expect("pos in bounds");
        let job = &mut jobs[i];
        job.state = ProcessState::Running;
        debug!(name = %job.process.name, time, burst = job.remaining, "sjf dispatch");
        chart.push(Interval::new(job.process.name.clone(), time, time + job.remaining));
        time += job.remaining;
        job.remaining = 0;
        job.state = ProcessState::Finished;
    }
    chart
}

fn priority(jobs: &mut [Job]) -> Vec<Interval> {
    let mut pending = arrival_order(jobs);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut chart = Vec::with_capacity(jobs.len());
    let mut time = 0;

    while !pending.is_empty() || !ready.is_empty() {
        admit(jobs, &mut pending, &mut ready, time);
        if ready.is_empty() {
            time = jobs[*pending.front().expect("pending non-empty")].process.arrival;
            continue;
        }
        // Lowest priority value is most urgent; ties by arrival, then
        // input order. Non-preemptive.
        let pos = ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| (jobs[i].process.priority, jobs[i].process.arrival, i))
            .map(|(pos, _)| pos)
            .expect("ready non-empty");
        let i = ready.remove(pos).expect("pos in bounds");
        let job = &mut jobs[i];
        job.state = ProcessState::Running;
        debug!(name = %job.process.name, time, priority = job.process.priority, "priority dispatch");
        chart.push(Interval::new(job.process.name.clone(), time, time + job.remaining));
        time += job.remaining;
        job.remaining = 0;
        job.state = ProcessState::Finished;
    }
    chart
}

fn round_robin(jobs: &mut [Job], quantum: u64) -> Vec<Interval> {
    let mut pending = arrival_order(jobs);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut chart = Vec::new();
    let mut time = 0;

    while !pending.is_empty() || !ready.is_empty() {
        admit(jobs, &mut pending, &mut ready, time);
        if ready.is_empty() {
            time = jobs[*pending.front().expect("pending non-empty")].process.arrival;
            continue;
        }
        let i = ready.pop_front().expect("ready non-empty");
        let job = &mut jobs[i];
        job.state = ProcessState::Running;
        let slice = job.remaining.min(quantum);
        debug!(name = %job.process.name, time, slice, "rr dispatch");
        chart.push(Interval::new(job.process.name.clone(), time, time + slice));
        job.remaining -= slice;
        time += slice;

        // Anything that arrived during (or exactly at the end of) the slice
        // joins the queue ahead of the preempted job.
        admit(jobs, &mut pending, &mut ready, time);
        if jobs[i].remaining > 0 {
            jobs[i].state = ProcessState::Ready;
            ready.push_back(i);
        } else {
            jobs[i].state = ProcessState::Finished;
        }
    }
    chart
}

fn srtf(jobs: &mut [Job]) -> Vec<Interval> {
    let mut pending = arrival_order(jobs);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut chart: Vec<Interval> = Vec::new();
    let mut time = 0;
    let mut running: Option<usize> = None;
    let mut unfinished = jobs.len();

    while unfinished > 0 {
        admit(jobs, &mut pending, &mut ready, time);
        if ready.is_empty() {
            time = jobs[*pending.front().expect("pending non-empty")].process.arrival;
            continue;
        }
        // Shortest remaining time wins; the running job keeps the CPU on a
        // tie (preemption only when strictly shorter), other ties fall to
        // arrival then input order.
        let choice = *ready
            .iter()
            .min_by_key(|&&i| {
                (
                    jobs[i].remaining,
                    running != Some(i),
                    jobs[i].process.arrival,
                    i,
                )
            })
            .expect("ready non-empty");
        if running != Some(choice) {
            if let Some(prev) = running {
                jobs[prev].state = ProcessState::Ready;
                debug!(name = %jobs[prev].process.name, time, "srtf preempt");
            }
            jobs[choice].state = ProcessState::Running;
            debug!(name = %jobs[choice].process.name, time, remaining = jobs[choice].remaining, "srtf dispatch");
            running = Some(choice);
        }

        // One time unit; contiguous units for the same job collapse into a
        // single interval.
        let name = jobs[choice].process.name.clone();
        match chart.last_mut() {
            Some(last) if last.name == name && last.end == time => last.end += 1,
            _ => chart.push(Interval::new(name, time, time + 1)),
        }
        time += 1;
        jobs[choice].remaining -= 1;
        if jobs[choice].remaining == 0 {
            jobs[choice].state = ProcessState::Finished;
            ready.retain(|&i| i != choice);
            running = None;
            unfinished -= 1;
        }
    }
    chart
}
