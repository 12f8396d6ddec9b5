use queens::search::backtrack;
use queens::{
    canonicalize, partition, solve, Board, NoopObserver, SolutionReport, SolveObserver,
    SolverConfig, Strategy, Transform,
};
use std::collections::{BTreeSet, HashMap};

/// Known solution counts for N = 1..=10: (total, unique).
const KNOWN_COUNTS: [(u64, u64); 10] = [
    (1, 1),
    (0, 0),
    (0, 0),
    (2, 1),
    (10, 2),
    (4, 1),
    (40, 6),
    (92, 12),
    (352, 46),
    (724, 92),
];

fn all_solutions(n: usize) -> Vec<Board> {
    let mut solutions = Vec::new();
    let mut board = Board::new(n).unwrap();
    backtrack(&mut board, 0, &mut |b: &Board| solutions.push(b.clone()));
    solutions
}

/// Keeps every reported board with its classification.
#[derive(Default)]
struct Collector {
    reports: Vec<(Board, bool, u64)>,
}

impl SolveObserver for Collector {
    fn on_solution(&mut self, report: &SolutionReport<'_>) {
        self.reports
            .push((report.board.clone(), report.is_unique, report.unique_id));
    }
}

#[test]
fn test_known_counts_sequential() {
    for (i, &(total, unique)) in KNOWN_COUNTS.iter().enumerate() {
        let n = i + 1;
        let config = SolverConfig::new(n)
            .with_strategy(Strategy::Sequential)
            .with_solution_reports(false);
        let result = solve(&config, &mut NoopObserver).unwrap();
        assert_eq!(result.total_solutions, total, "total for n = {}", n);
        assert_eq!(result.unique_solutions, unique, "unique for n = {}", n);
    }
}

#[test]
fn test_known_counts_parallel() {
    for (i, &(total, unique)) in KNOWN_COUNTS.iter().enumerate() {
        let n = i + 1;
        let config = SolverConfig::new(n)
            .with_workers(4)
            .with_solution_reports(false);
        let result = solve(&config, &mut NoopObserver).unwrap();
        assert_eq!(result.total_solutions, total, "total for n = {}", n);
        assert_eq!(result.unique_solutions, unique, "unique for n = {}", n);
    }
}

#[test]
fn test_thread_count_does_not_change_results() {
    for n in [6, 8, 9] {
        let runs: Vec<_> = [1, 2, 8]
            .iter()
            .map(|&workers| {
                let config = SolverConfig::new(n)
                    .with_workers(workers)
                    .with_solution_reports(false);
                solve(&config, &mut NoopObserver).unwrap()
            })
            .collect();

        for run in &runs[1..] {
            assert_eq!(run.total_solutions, runs[0].total_solutions);
            assert_eq!(run.unique_solutions, runs[0].unique_solutions);
            // Ids may be assigned in a different order; the classes may not.
            assert_eq!(run.sorted_canonical_forms(), runs[0].sorted_canonical_forms());
        }
    }
}

#[test]
fn test_parallel_matches_sequential_classes() {
    let sequential = solve(
        &SolverConfig::new(8).with_strategy(Strategy::Sequential),
        &mut NoopObserver,
    )
    .unwrap();
    let parallel = solve(&SolverConfig::new(8).with_workers(3), &mut NoopObserver).unwrap();
    assert_eq!(
        sequential.sorted_canonical_forms(),
        parallel.sorted_canonical_forms()
    );
}

#[test]
fn test_partition_is_complete() {
    for n in 1..=9 {
        let full: BTreeSet<Vec<u8>> = all_solutions(n)
            .iter()
            .map(|b| b.columns().to_vec())
            .collect();

        for depth in 0..n {
            let mut from_items = Vec::new();
            for item in partition(n, depth).unwrap() {
                let mut board = item.board.clone();
                backtrack(&mut board, item.depth, &mut |b: &Board| {
                    from_items.push(b.columns().to_vec())
                });
            }
            // Same solutions, each reachable from exactly one item.
            assert_eq!(from_items.len(), full.len(), "n = {}, depth = {}", n, depth);
            let from_items: BTreeSet<_> = from_items.into_iter().collect();
            assert_eq!(from_items, full, "n = {}, depth = {}", n, depth);
        }
    }
}

#[test]
fn test_canonical_forms_separate_orbits() {
    let solutions = all_solutions(8);
    let mut classes: HashMap<String, Vec<Board>> = HashMap::new();
    for board in &solutions {
        classes
            .entry(canonicalize(board).to_string())
            .or_default()
            .push(board.clone());
    }
    assert_eq!(classes.len(), 12);

    let classes: Vec<Vec<Board>> = classes.into_values().collect();
    for (i, class) in classes.iter().enumerate() {
        // Inside a class, every member is a symmetry of the first.
        let orbit: Vec<Board> = Transform::ALL.iter().map(|t| t.apply(&class[0])).collect();
        for member in class {
            assert!(orbit.contains(member));
        }
        // Across classes, no member is a symmetry of another class's member.
        for other in &classes[i + 1..] {
            assert!(other.iter().all(|b| !orbit.contains(b)));
        }
    }
}

#[test]
fn test_canonical_form_idempotent_over_all_solutions() {
    for n in [5, 6, 7, 8] {
        for board in all_solutions(n) {
            let canonical = canonicalize(&board);
            for t in Transform::ALL {
                assert_eq!(canonicalize(&t.apply(&board)), canonical);
            }
        }
    }
}

#[test]
fn test_every_reported_variant_points_at_known_id() {
    let config = SolverConfig::new(8).with_workers(4);
    let mut collector = Collector::default();
    let result = solve(&config, &mut collector).unwrap();

    assert_eq!(collector.reports.len(), 92);
    let ids: HashMap<String, u64> = result
        .unique_forms
        .iter()
        .map(|(id, form)| (form.to_string(), *id))
        .collect();
    for (board, _, unique_id) in &collector.reports {
        assert_eq!(ids[&canonicalize(board).to_string()], *unique_id);
    }
    let new_classes = collector.reports.iter().filter(|(_, u, _)| *u).count();
    assert_eq!(new_classes, 12);
}

#[test]
fn test_boundary_sizes() {
    let one = solve(&SolverConfig::new(1).with_workers(2), &mut NoopObserver).unwrap();
    assert_eq!((one.total_solutions, one.unique_solutions), (1, 1));
    assert_eq!(one.unique_forms[0].1.as_str(), "0");

    for n in [2, 3] {
        let result = solve(&SolverConfig::new(n), &mut NoopObserver).unwrap();
        assert_eq!(result.total_solutions, 0);
        assert!(result.unique_forms.is_empty());
    }
}
