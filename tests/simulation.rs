use elevator_dispatch::report::publish;
use elevator_dispatch::{
    Algorithm, Elevator, Execution, Measurement, Simulation, SimulationConfig, SimulationError,
};
use rand::{rngs::StdRng, SeedableRng};

fn small_config() -> SimulationConfig {
    SimulationConfig {
        workload_sizes: vec![10, 100, 1000],
        max_floor: 100,
        num_elevators: 3,
        num_simulations: 5,
        measurement: Measurement::FirstElevator,
        algorithms: Algorithm::ALL.to_vec(),
    }
}

#[test]
fn sequential_and_parallel_agree() {
    let simulation = Simulation::new(small_config()).unwrap();
    let sequential = simulation.run_seeded(2024, Execution::Sequential).unwrap();
    let parallel = simulation
        .run_seeded(2024, Execution::Parallel { threads: 3 })
        .unwrap();
    assert_eq!(sequential, parallel);

    let single_worker = simulation
        .run_seeded(2024, Execution::Parallel { threads: 1 })
        .unwrap();
    assert_eq!(sequential, single_worker);
}

#[test]
fn different_seeds_differ() {
    let simulation = Simulation::new(small_config()).unwrap();
    let a = simulation.run_seeded(1, Execution::Sequential).unwrap();
    let b = simulation.run_seeded(2, Execution::Sequential).unwrap();
    assert_ne!(a, b);
}

#[test]
fn table_covers_every_algorithm_and_size() {
    let simulation = Simulation::new(small_config()).unwrap();
    let table = simulation.run(&mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(table.algorithms().collect::<Vec<_>>(), Algorithm::ALL.to_vec());
    for algorithm in Algorithm::ALL {
        for size in [10, 100, 1000] {
            let value = table.get(algorithm, size).unwrap();
            assert!(value > 0.0, "{algorithm} at {size}");
        }
    }
}

#[test]
fn whole_workload_dispatchers_cost_at_least_a_stop_per_request() {
    let simulation = Simulation::new(small_config()).unwrap();
    let table = simulation.run(&mut StdRng::seed_from_u64(3)).unwrap();
    for algorithm in [Algorithm::Scan, Algorithm::Look, Algorithm::Sstf] {
        assert!(table.get(algorithm, 1000).unwrap() >= 1000.0 * 3.0);
    }
    // FIFO's first elevator only sees every third request.
    let fifo = table.get(Algorithm::Fifo, 1000).unwrap();
    assert!(fifo >= 334.0 * 3.0);
}

#[test]
fn invalid_config_is_an_error() {
    let config = SimulationConfig {
        max_floor: 0,
        ..small_config()
    };
    assert!(matches!(Simulation::new(config), Err(SimulationError::NoFloors)));
}

#[test]
fn look_example_from_floor_ten() {
    let mut fleet = vec![Elevator::tracked(10)];
    Algorithm::Look.dispatch(&[2, 8, 15], &mut fleet);
    assert_eq!(fleet[0].route(), Some(&[15, 8, 2][..]));
}

#[test]
fn seeded_run_publishes_results_and_plot() {
    let simulation = Simulation::new(small_config()).unwrap();
    let table = simulation.run_seeded(8, Execution::Sequential).unwrap();

    let dir = std::env::temp_dir().join(format!("elevator_dispatch_it_{}", std::process::id()));
    let path = dir.join("results").join("results.json");
    let plot = dir.join("results_plot.svg");
    let summary = publish(&table, &path, Some(&plot)).unwrap();
    assert_eq!(summary.lines().count(), 6);

    let svg = std::fs::read_to_string(&plot).unwrap();
    assert!(svg.contains("DynamicScheduling"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["DynamicScheduling", "FIFO", "LOOK", "SCAN", "SSTF"]);
    for row in object.values() {
        let row = row.as_object().unwrap();
        assert!(row.contains_key("10") && row.contains_key("100") && row.contains_key("1000"));
        assert!(row.values().all(|v| v.is_f64()));
    }

    std::fs::remove_dir_all(dir).unwrap();
}
