use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use dpllsat::bench::{BenchConfig, BenchRow, run_dataset, run_one};
use dpllsat::solver::BackendKind;

#[test]
fn benchmark_csv_has_expected_shape() {
    let root = temp_dataset_dir("bench_csv_shape");
    fs::create_dir_all(root.join("nested")).expect("mkdir");

    fs::write(root.join("sat.cnf"), "p cnf 2 3\n1 2 0\n-1 2 0\n1 -2 0\n").expect("write sat");
    fs::write(
        root.join("nested").join("unsat.cnf"),
        "p cnf 2 4\n1 2 0\n-1 -2 0\n1 -2 0\n-1 2 0\n",
    )
    .expect("write unsat");
    fs::write(root.join("notes.txt"), "not an instance\n").expect("write txt");

    let csv_path = root.join("results.csv");
    let cfg = BenchConfig {
        backend: BackendKind::Dpll,
        timeout: Duration::from_millis(10_000),
        verify: true,
    };
    let rows = run_dataset(&root, cfg, &csv_path, false).expect("run dataset");
    assert_eq!(rows.len(), 2);

    let csv_text = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_text.lines();
    let header = lines.next().unwrap_or("");
    assert_eq!(header, BenchRow::csv_header());
    let data = lines.collect::<Vec<_>>();
    assert_eq!(data.len(), 2);

    let mut statuses = Vec::new();
    for line in &data {
        let cols = line.split(',').collect::<Vec<_>>();
        assert_eq!(cols.len(), 9);
        assert_eq!(cols[2], "dpll");
        cols[3].parse::<u128>().expect("wall_ms");
        assert_eq!(cols[6], "2");
        statuses.push(cols[1].to_string());
    }
    statuses.sort();
    assert_eq!(statuses, vec!["sat".to_string(), "unsat".to_string()]);
}

#[test]
fn parse_errors_are_reported_per_file() {
    let root = temp_dataset_dir("bench_parse_error");
    fs::create_dir_all(&root).expect("mkdir");
    let path = root.join("broken.cnf");
    fs::write(&path, "p cnf 1 1\n1 oops 0\n").expect("write");

    let row = run_one(&path, BenchConfig::default());
    assert_eq!(row.status, "parse_error");
    assert_eq!(row.vars, None);
    assert!(row.wall_ms.is_some());
}

#[test]
fn brute_backend_rows_match_dpll() {
    let root = temp_dataset_dir("bench_backends");
    fs::create_dir_all(&root).expect("mkdir");
    let path = root.join("php.cnf");
    fs::write(
        &path,
        "p cnf 6 9\n1 2 0\n3 4 0\n5 6 0\n-1 -3 0\n-1 -5 0\n-3 -5 0\n-2 -4 0\n-2 -6 0\n-4 -6 0\n",
    )
    .expect("write");

    for backend in [BackendKind::Dpll, BackendKind::Brute, BackendKind::Varisat] {
        let cfg = BenchConfig {
            backend,
            ..BenchConfig::default()
        };
        let row = run_one(&path, cfg);
        assert_eq!(row.status, "unsat", "backend {}", backend.name());
        assert_eq!(row.backend, backend.name());
        assert_eq!(row.clauses, Some(9));
    }
}

fn temp_dataset_dir(tag: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    p.push(format!("dpllsat_{}_{}", tag, t));
    p
}
