use ossim::cli::{parse, utils};
use ossim::paging::policy::ReplacementPolicy;
use ossim::sched::engine::{SchedulingPolicy, run};
use ossim::sched::process::Process;
use std::fs::{read_to_string, remove_file, write};

#[test]
fn test_parse_reference_string() {
    assert_eq!(
        parse::reference_string("1 2  3\t4").unwrap(),
        vec![1, 2, 3, 4]
    );
    assert!(parse::reference_string("").is_err());
    assert!(parse::reference_string("1 two 3").is_err());
    assert!(parse::reference_string("1 -2").is_err());
}

#[test]
fn test_parse_process_line() {
    assert_eq!(
        parse::process_line("A 0 4").unwrap(),
        Process::new("A", 0, 4)
    );
    assert_eq!(
        parse::process_line("B 1 3 2").unwrap(),
        Process::with_priority("B", 1, 3, 2)
    );
    assert!(parse::process_line("A").is_err());
    assert!(parse::process_line("A 0 4 1 9").is_err());
    assert!(parse::process_line("A -1 4").is_err());
    assert!(parse::process_line("A 0 0").is_err());
    assert!(parse::process_line("A 0 -3").is_err());
}

#[test]
fn test_parse_process_list_splits_on_semicolons_and_newlines() {
    let procs = parse::process_list("A 0 4; B 1 3 2\nC 2 1").unwrap();
    assert_eq!(procs.len(), 3);
    assert_eq!(procs[1].priority, 2);
    assert!(parse::process_list("  ;  ").is_err());
}

#[test]
fn test_parse_policies() {
    assert_eq!(
        parse::replacement_policy("lru").unwrap(),
        ReplacementPolicy::Lru
    );
    assert!(parse::replacement_policy("CLOCK").is_err());

    assert_eq!(
        parse::scheduling_policy("fcfs", None).unwrap(),
        SchedulingPolicy::Fcfs
    );
    assert_eq!(
        parse::scheduling_policy("RR", Some(2)).unwrap(),
        SchedulingPolicy::RoundRobin { quantum: 2 }
    );
    // RR needs a quantum; nothing else takes one.
    assert!(parse::scheduling_policy("RR", None).is_err());
    assert!(parse::scheduling_policy("SJF", Some(2)).is_err());
    assert!(parse::scheduling_policy("MLFQ", None).is_err());
}

#[test]
fn test_import_processes_csv() {
    let path = "test_procs.csv";
    write(path, "name,arrival,burst,priority\nA,0,4,1\nB,1,3,2\n").unwrap();
    let procs = utils::import_processes(path).unwrap();
    assert_eq!(
        procs,
        vec![
            Process::with_priority("A", 0, 4, 1),
            Process::with_priority("B", 1, 3, 2),
        ]
    );
    remove_file(path).unwrap();
}

#[test]
fn test_import_defaults_missing_priority_column() {
    let path = "test_procs_noprio.csv";
    write(path, "name,arrival,burst\nA,0,4\n").unwrap();
    let procs = utils::import_processes(path).unwrap();
    assert_eq!(procs, vec![Process::new("A", 0, 4)]);
    remove_file(path).unwrap();
}

#[test]
fn test_import_rejects_malformed_records() {
    let path = "test_procs_bad.csv";
    write(path, "name,arrival,burst\nA,-1,4\n").unwrap();
    assert!(utils::import_processes(path).is_err());
    write(path, "name,arrival,burst\nA,0,0\n").unwrap();
    assert!(utils::import_processes(path).is_err());
    remove_file(path).unwrap();
}

#[test]
fn test_export_timeline_csv() {
    let path = "test_timeline.csv";
    let chart = run(
        &[Process::new("A", 0, 4), Process::new("B", 1, 3)],
        SchedulingPolicy::Fcfs,
    )
    .unwrap();
    utils::export_timeline(&chart, path).unwrap();
    let contents = read_to_string(path).unwrap();
    assert!(contents.starts_with("name,start,end"));
    assert!(contents.contains("A,0,4"));
    assert!(contents.contains("B,4,7"));
    remove_file(path).unwrap();
}
