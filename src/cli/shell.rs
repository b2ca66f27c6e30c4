// cli/shell.rs

use crate::cli::{parse, utils};
use crate::paging::{self, engine::StepRecord, summary::PageSummary};
use crate::render::{frames, gantt, playback::Playback};
use crate::sched::{self, process::Process, summary::SchedSummary, timeline};
use crate::sched::timeline::Interval;
use anyhow::{Context, Result, bail};
use rustyline::{Editor, error::ReadlineError};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// Result of the most recent run, kept for `stats`, `json`, `export`
/// and `merge`.
#[derive(Serialize)]
enum LastRun {
    Page {
        capacity: usize,
        steps: Vec<StepRecord>,
        summary: PageSummary,
    },
    Sched {
        processes: Vec<Process>,
        chart: Vec<Interval>,
        summary: SchedSummary,
    },
}

struct Shell {
    speed_ms: u64,
    last: Option<LastRun>,
}

pub fn run_shell() -> Result<()> {
    let mut rl = Editor::<()>::new()?;
    let mut shell = Shell {
        speed_ms: 0,
        last: None,
    };

    println!("ossim shell. Type 'help' for commands, 'exit' to quit.");
    loop {
        match rl.readline("sim> ") {
            Ok(line) if line.trim().eq_ignore_ascii_case("exit") => break,
            Ok(line) => {
                if let Err(e) = shell.dispatch(line.trim()) {
                    println!("Error: {e:#}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }
    Ok(())
}

impl Shell {
    fn dispatch(&mut self, line: &str) -> Result<()> {
        let mut tokens = line.split_whitespace();
        let Some(cmd) = tokens.next() else {
            return Ok(());
        };
        let rest: Vec<&str> = tokens.collect();

        match cmd.to_ascii_lowercase().as_str() {
            "help" => {
                print_help();
                Ok(())
            }
            "speed" => {
                let ms = rest
                    .first()
                    .context("usage: speed <milliseconds>")?
                    .parse()
                    .context("speed must be a number of milliseconds")?;
                self.speed_ms = ms;
                Ok(())
            }
            "page" => self.cmd_page(&rest),
            "sched" => self.cmd_sched(&rest),
            "load" => self.cmd_load(&rest),
            "merge" => self.cmd_merge(),
            "stats" => self.cmd_stats(),
            "json" => self.cmd_json(),
            "export" => self.cmd_export(&rest),
            other => bail!("unknown command '{other}' (try 'help')"),
        }
    }

    /// `page <FIFO|LRU|OPT> <capacity> <refs...>`
    fn cmd_page(&mut self, args: &[&str]) -> Result<()> {
        if args.len() < 3 {
            bail!("usage: page <FIFO|LRU|OPT> <capacity> <page numbers...>");
        }
        let policy = parse::replacement_policy(args[0])?;
        let capacity: usize = args[1]
            .parse()
            .with_context(|| format!("invalid capacity '{}'", args[1]))?;
        let refs = parse::reference_string(&args[2..].join(" "))?;

        let steps = paging::engine::run(&refs, capacity, policy)?;
        let summary = PageSummary::from_steps(&steps);

        self.replay(Playback::new(steps.clone()), |step| {
            frames::step_row(&step, capacity)
        });
        print_page_summary(&summary);
        self.last = Some(LastRun::Page {
            capacity,
            steps,
            summary,
        });
        Ok(())
    }

    /// `sched <FCFS|SJF|SRTF|PRIORITY> <records>` or `sched RR <q> <records>`
    /// where records are `name arrival burst [priority]` separated by `;`.
    fn cmd_sched(&mut self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            bail!("usage: sched <FCFS|SJF|RR|SRTF|PRIORITY> [quantum] <name arrival burst [priority]; ...>");
        }
        let is_rr = args[0].eq_ignore_ascii_case("RR");
        let (quantum, body) = if is_rr {
            let q = args
                .get(1)
                .context("usage: sched RR <quantum> <records>")?
                .parse::<u64>()
                .context("quantum must be a positive integer")?;
            (Some(q), &args[2..])
        } else {
            (None, &args[1..])
        };
        let policy = parse::scheduling_policy(args[0], quantum)?;
        let processes = parse::process_list(&body.join(" "))?;

        self.run_sched(processes, policy)
    }

    /// `load <file.csv> <policy> [quantum]`
    fn cmd_load(&mut self, args: &[&str]) -> Result<()> {
        if args.len() < 2 {
            bail!("usage: load <file.csv> <FCFS|SJF|RR|SRTF|PRIORITY> [quantum]");
        }
        let quantum = match args.get(2) {
            Some(tok) => Some(tok.parse::<u64>().context("quantum must be a positive integer")?),
            None => None,
        };
        let policy = parse::scheduling_policy(args[1], quantum)?;
        let processes = utils::import_processes(args[0])?;
        self.run_sched(processes, policy)
    }

    fn run_sched(
        &mut self,
        processes: Vec<Process>,
        policy: sched::engine::SchedulingPolicy,
    ) -> Result<()> {
        let chart = sched::engine::run(&processes, policy)?;
        let fixed = timeline::with_idle_gaps(&chart);

        self.replay(Playback::new(fixed.clone()), |iv| gantt::step_line(&iv));
        println!("{}", gantt::render(&fixed));

        let summary = SchedSummary::from_chart(&processes, &chart)?;
        print_sched_summary(&summary);
        self.last = Some(LastRun::Sched {
            processes,
            chart,
            summary,
        });
        Ok(())
    }

    /// Reveal precomputed events one by one, pausing `speed_ms` between
    /// steps. Pacing never touches the events themselves.
    fn replay<T: Clone>(&self, playback: Playback<T>, line: impl Fn(T) -> String) {
        for event in playback {
            println!("{}", line(event));
            if self.speed_ms > 0 {
                thread::sleep(Duration::from_millis(self.speed_ms));
            }
        }
    }

    /// Re-render the last timeline with adjacent same-process slices merged.
    fn cmd_merge(&self) -> Result<()> {
        match &self.last {
            Some(LastRun::Sched { chart, .. }) => {
                let merged = timeline::merge_continuous(chart);
                println!("{}", gantt::render(&timeline::with_idle_gaps(&merged)));
                Ok(())
            }
            _ => bail!("no scheduling run to merge"),
        }
    }

    fn cmd_stats(&self) -> Result<()> {
        match &self.last {
            Some(LastRun::Page { summary, .. }) => {
                print_page_summary(summary);
                Ok(())
            }
            Some(LastRun::Sched { summary, .. }) => {
                print_sched_summary(summary);
                Ok(())
            }
            None => bail!("nothing has run yet"),
        }
    }

    fn cmd_json(&self) -> Result<()> {
        match &self.last {
            Some(last) => {
                println!("{}", serde_json::to_string_pretty(last)?);
                Ok(())
            }
            None => bail!("nothing has run yet"),
        }
    }

    /// `export <file.csv>` — write the last timeline out as CSV.
    fn cmd_export(&self, args: &[&str]) -> Result<()> {
        let path = args.first().context("usage: export <file.csv>")?;
        match &self.last {
            Some(LastRun::Sched { chart, .. }) => {
                utils::export_timeline(chart, path)?;
                println!("wrote {path}");
                Ok(())
            }
            _ => bail!("no scheduling timeline to export"),
        }
    }
}

fn print_page_summary(s: &PageSummary) {
    println!(
        "total: {}  hits: {}  faults: {}  hit ratio: {:.2}  fault ratio: {:.2}",
        s.total, s.hits, s.faults, s.hit_ratio, s.fault_ratio
    );
}

fn print_sched_summary(s: &SchedSummary) {
    println!(
        "{:<10} {:>7} {:>6} {:>10} {:>10} {:>8}",
        "process", "arrival", "burst", "completion", "turnaround", "waiting"
    );
    for r in &s.rows {
        println!(
            "{:<10} {:>7} {:>6} {:>10} {:>10} {:>8}",
            r.name, r.arrival, r.burst, r.completion, r.turnaround, r.waiting
        );
    }
    println!(
        "avg turnaround: {:.2}  avg waiting: {:.2}  completion: {}",
        s.avg_turnaround, s.avg_waiting, s.completion
    );
}

fn print_help() {
    println!("Commands:");
    println!("  page <FIFO|LRU|OPT> <capacity> <page numbers...>");
    println!("  sched <FCFS|SJF|SRTF|PRIORITY> <name arrival burst [priority]; ...>");
    println!("  sched RR <quantum> <name arrival burst; ...>");
    println!("  load <file.csv> <policy> [quantum]   run a CSV process set");
    println!("  merge                                re-render last chart, slices merged");
    println!("  stats                                reprint last summary");
    println!("  json                                 dump last run as JSON");
    println!("  export <file.csv>                    write last timeline as CSV");
    println!("  speed <ms>                           per-step animation delay");
    println!("  exit");
}
