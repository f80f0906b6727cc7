/*!
 * Simulation Tests
 * End-to-end runs from JSON configs through the simulator
 */

use pretty_assertions::assert_eq;
use schedsim::{
    run_config, PolicyKind, ProcessSpec, Quantum, RoundRobinPolicy, SchedulerError,
    SimulationConfig, SimulationReport, Simulator,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_run_round_robin() {
    let file = write_config(
        r#"{
            "policy": "rr",
            "quantum": 3,
            "processes": [
                { "pid": 1, "service_time": 4 },
                { "pid": 2, "service_time": 3 }
            ]
        }"#,
    );

    let config = SimulationConfig::load(file.path()).unwrap();
    let report = run_config(&config).unwrap();

    assert_eq!(report.policy, PolicyKind::RoundRobin);
    assert_eq!(report.quantum, 3);
    assert_eq!(report.schedule_string(), "1 1 1 2 2 2 1");
    assert_eq!(report.process(2).unwrap().finish_cycle, 6);
    assert_eq!(report.process(1).unwrap().finish_cycle, 7);
    assert_eq!(report.process(1).unwrap().waiting, 3);
    assert_eq!(report.context_switches, 2);
}

#[test]
fn test_fcfs_versus_round_robin() {
    let processes = vec![
        ProcessSpec::new(1, 6),
        ProcessSpec::new(2, 1),
        ProcessSpec::new(3, 1),
    ];

    let fcfs = run_config(&SimulationConfig::new(
        PolicyKind::Fcfs,
        Quantum::default(),
        processes.clone(),
    ))
    .unwrap();
    let rr = run_config(&SimulationConfig::new(
        PolicyKind::RoundRobin,
        Quantum::new(2).unwrap(),
        processes,
    ))
    .unwrap();

    assert_eq!(fcfs.schedule_string(), "1 1 1 1 1 1 2 3");
    assert_eq!(rr.schedule_string(), "1 1 2 3 1 1 1 1");

    // Short jobs finish sooner under time slicing
    assert!(rr.average_waiting() < fcfs.average_waiting());
    assert_eq!(fcfs.total_cycles, rr.total_cycles);
}

#[test]
fn test_every_cycle_is_accounted_for() {
    let processes: Vec<ProcessSpec> = (1..=5).map(|pid| ProcessSpec::new(pid, pid as u64 * 2)).collect();
    let total: u64 = processes.iter().map(|p| p.service_time).sum();

    let mut sim = Simulator::new(
        Box::new(RoundRobinPolicy::new(Quantum::new(3).unwrap())),
        Quantum::new(3).unwrap(),
    );
    let report = sim.run(&processes).unwrap();

    assert_eq!(report.total_cycles, total);
    assert_eq!(report.idle_cycles, 0);
    assert_eq!(report.schedule.len() as u64, total);
    for spec in &processes {
        let ran = report
            .schedule
            .iter()
            .filter(|slot| **slot == Some(spec.pid))
            .count() as u64;
        assert_eq!(ran, spec.service_time, "pid {}", spec.pid);
    }
}

#[test]
fn test_report_round_trips_as_json() {
    let config = SimulationConfig::new(
        PolicyKind::RoundRobin,
        Quantum::new(2).unwrap(),
        vec![ProcessSpec::new(1, 3), ProcessSpec::new(2, 2)],
    );
    let report = run_config(&config).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: SimulationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SimulationConfig::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
}

#[test]
fn test_duplicate_pid_in_config() {
    let config = SimulationConfig::new(
        PolicyKind::Fcfs,
        Quantum::default(),
        vec![ProcessSpec::new(4, 1), ProcessSpec::new(4, 1)],
    );
    assert_eq!(run_config(&config), Err(SchedulerError::DuplicateProcess(4)));
}

#[test]
fn test_demo_config() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/round_robin.json");
    let report = run_config(&SimulationConfig::load(path).unwrap()).unwrap();

    assert_eq!(report.schedule_string(), "1 1 1 2 2 2 3 3 1 1 1 2 1");
    assert_eq!(report.process(3).unwrap().finish_cycle, 8);
    assert_eq!(report.process(2).unwrap().finish_cycle, 12);
    assert_eq!(report.process(1).unwrap().finish_cycle, 13);
}
