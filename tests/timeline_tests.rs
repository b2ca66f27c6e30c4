use ossim::render::{frames, gantt, playback::Playback};
use ossim::sched::engine::{SchedulingPolicy, run};
use ossim::sched::process::Process;
use ossim::sched::summary::SchedSummary;
use ossim::sched::timeline::{Interval, busy_time, merge_continuous, with_idle_gaps};

#[test]
fn test_merge_coalesces_adjacent_same_process_slices() {
    let chart = vec![
        Interval::new("A", 0, 2),
        Interval::new("A", 2, 4),
        Interval::new("B", 4, 5),
    ];
    assert_eq!(
        merge_continuous(&chart),
        vec![Interval::new("A", 0, 4), Interval::new("B", 4, 5)]
    );
}

#[test]
fn test_merge_keeps_gapped_slices_apart() {
    let chart = vec![Interval::new("A", 0, 2), Interval::new("A", 3, 4)];
    assert_eq!(merge_continuous(&chart), chart);
}

#[test]
fn test_merge_preserves_busy_time_and_order() {
    let procs = vec![
        Process::new("A", 0, 5),
        Process::new("B", 1, 3),
        Process::new("C", 2, 4),
    ];
    let chart = run(&procs, SchedulingPolicy::RoundRobin { quantum: 2 }).unwrap();
    let merged = merge_continuous(&chart);

    assert_eq!(busy_time(&merged), busy_time(&chart));
    for w in merged.windows(2) {
        assert!(w[0].end <= w[1].start);
    }
}

#[test]
fn test_idle_gaps_fill_interior_and_leading_holes() {
    let chart = vec![Interval::new("A", 2, 4), Interval::new("B", 7, 8)];
    let fixed = with_idle_gaps(&chart);
    assert_eq!(
        fixed,
        vec![
            Interval::new("Idle", 0, 2),
            Interval::new("A", 2, 4),
            Interval::new("Idle", 4, 7),
            Interval::new("B", 7, 8),
        ]
    );
    // Gap-free cover of [0, completion).
    let mut cursor = 0;
    for iv in &fixed {
        assert_eq!(iv.start, cursor);
        cursor = iv.end;
    }
    assert_eq!(cursor, 8);
}

#[test]
fn test_idle_gaps_untouched_when_contiguous() {
    let chart = vec![Interval::new("A", 0, 3), Interval::new("B", 3, 5)];
    assert_eq!(with_idle_gaps(&chart), chart);
}

#[test]
fn test_busy_time_excludes_idle() {
    let chart = vec![
        Interval::new("Idle", 0, 2),
        Interval::new("A", 2, 4),
        Interval::new("Idle", 4, 7),
        Interval::new("A", 7, 8),
    ];
    let totals = busy_time(&chart);
    assert_eq!(totals["A"], 3);
    assert!(!totals.contains_key("Idle"));
}

#[test]
fn test_sched_summary_turnaround_and_waiting() {
    let procs = vec![Process::new("A", 0, 4), Process::new("B", 1, 3)];
    let chart = run(&procs, SchedulingPolicy::Fcfs).unwrap();
    let summary = SchedSummary::from_chart(&procs, &chart).unwrap();

    assert_eq!(summary.rows[0].completion, 4);
    assert_eq!(summary.rows[0].turnaround, 4);
    assert_eq!(summary.rows[0].waiting, 0);
    assert_eq!(summary.rows[1].completion, 7);
    assert_eq!(summary.rows[1].turnaround, 6);
    assert_eq!(summary.rows[1].waiting, 3);
    assert_eq!(summary.avg_turnaround, 5.0);
    assert_eq!(summary.avg_waiting, 1.5);
    assert_eq!(summary.completion, 7);
}

#[test]
fn test_sched_summary_uses_last_slice_for_completion() {
    let procs = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
    let chart = run(&procs, SchedulingPolicy::RoundRobin { quantum: 2 }).unwrap();
    let summary = SchedSummary::from_chart(&procs, &chart).unwrap();
    assert_eq!(summary.rows[0].completion, 8);
    assert_eq!(summary.rows[1].completion, 7);
}

#[test]
fn test_gantt_render_labels_and_ruler() {
    let chart = with_idle_gaps(&[Interval::new("A", 0, 2), Interval::new("B", 4, 6)]);
    let out = gantt::render(&chart);
    assert!(out.contains('A'));
    assert!(out.contains('B'));
    assert!(out.contains("Idle"));
    // Ruler carries every boundary.
    let ruler = out.lines().last().unwrap();
    for mark in ["0", "2", "4", "6"] {
        assert!(ruler.contains(mark), "missing ruler mark {mark}");
    }
}

#[test]
fn test_gantt_step_line_formats_idle_distinctly() {
    assert!(gantt::step_line(&Interval::new("Idle", 2, 5)).contains("(idle)"));
    assert!(gantt::step_line(&Interval::new("A", 0, 2)).ends_with('A'));
}

#[test]
fn test_frames_render_marks_reference_and_empty_slots() {
    use ossim::paging::{engine, policy::ReplacementPolicy};
    let steps = engine::run(&[1, 2, 1], 3, ReplacementPolicy::Fifo).unwrap();
    let row0 = frames::step_row(&steps[0], 3);
    assert!(row0.contains("fault"));
    assert!(row0.contains("1*"));
    assert!(row0.contains("[    ]"));
    let row2 = frames::step_row(&steps[2], 3);
    assert!(row2.contains("hit"));
}

#[test]
fn test_playback_is_restartable() {
    let mut playback = Playback::new(vec![1, 2, 3]);
    assert_eq!(playback.by_ref().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(playback.next(), None);
    playback.restart();
    assert_eq!(playback.next(), Some(1));
}

#[test]
fn test_playback_cancellation_stops_between_steps() {
    let mut playback = Playback::new(vec![1, 2, 3]);
    let handle = playback.handle();
    assert_eq!(playback.next(), Some(1));
    handle.cancel();
    assert_eq!(playback.next(), None);
    // The precomputed events are untouched.
    assert_eq!(playback.events(), &[1, 2, 3]);
}
