use ossim::cli::shell::run_shell;
use ossim::paging::{self, policy::ReplacementPolicy, summary::PageSummary};
use ossim::render::{frames, gantt};
use ossim::sched::{self, engine::SchedulingPolicy, process::Process, timeline};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <shell|demo>", args[0]);
        std::process::exit(1);
    }
    match args[1].as_str() {
        "shell" => run_shell()?,
        "demo" => demo()?,
        other => {
            eprintln!("Unknown command: {}", other);
            std::process::exit(1);
        }
    }
    Ok(())
}

/// One canned example per algorithm, rendered to stdout.
fn demo() -> anyhow::Result<()> {
    let refs = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    for policy in [
        ReplacementPolicy::Fifo,
        ReplacementPolicy::Lru,
        ReplacementPolicy::Opt,
    ] {
        let steps = paging::engine::run(&refs, 3, policy)?;
        let summary = PageSummary::from_steps(&steps);
        println!("--- {policy:?}, 3 frames ---");
        print!("{}", frames::render(&steps, 3));
        println!(
            "hits: {}  faults: {}  hit ratio: {:.2}\n",
            summary.hits, summary.faults, summary.hit_ratio
        );
    }

    let processes = vec![
        Process::with_priority("P1", 0, 7, 2),
        Process::with_priority("P2", 2, 4, 1),
        Process::with_priority("P3", 4, 1, 3),
        Process::with_priority("P4", 5, 4, 2),
    ];
    for policy in [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Sjf,
        SchedulingPolicy::Srtf,
        SchedulingPolicy::RoundRobin { quantum: 2 },
        SchedulingPolicy::Priority,
    ] {
        let chart = sched::engine::run(&processes, policy)?;
        println!("--- {policy:?} ---");
        println!("{}", gantt::render(&timeline::with_idle_gaps(&chart)));
    }
    Ok(())
}
