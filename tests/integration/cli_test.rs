use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_queens"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute queens")
}

#[test]
fn test_quiet_summary() {
    let output = run(&["8", "--quiet", "--threads", "2"]);
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("QUEENS-8"), "Banner should name the board size");
    assert!(stdout.contains("Using 2 thread(s)"));
    assert!(stdout.contains("Suppressing intermediate solutions"));
    assert!(stdout.contains("Total solutions found:          92"));
    assert!(stdout.contains("Unique solutions (no symmetry): 12"));
    assert!(stdout.contains("Reduction: 87.0%"));
    assert!(!stdout.contains("Solution #"), "Quiet mode should not print boards");
}

#[test]
fn test_prints_every_solution() {
    let output = run(&["4", "--strategy", "sequential"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Solution #1 (UNIQUE #1)"));
    assert!(stdout.contains("Solution #2 (variant of Unique #1)"));
    assert!(stdout.contains("· ♛ · ·"));
    assert_eq!(stdout.matches('♛').count(), 8);
}

#[test]
fn test_no_solutions_omits_reduction() {
    let output = run(&["3", "-q"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total solutions found:          0"));
    assert!(!stdout.contains("Reduction"));
}

#[test]
fn test_progress_goes_to_stderr() {
    let output = run(&["6", "-q", "-p", "-t", "2"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("100.0%"), "stderr was: {}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Progress tracking: ENABLED"));
}

#[test]
fn test_box_rows_are_closed() {
    let output = run(&["8", "-q", "-p", "-t", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<&str> = stdout.lines().filter(|l| l.starts_with('║')).collect();
    // Banner (seven rows with progress) plus summary (three rows).
    assert_eq!(rows.len(), 10, "stdout was: {}", stdout);
    for row in rows {
        assert!(row.ends_with('║'), "Unclosed row: {:?}", row);
        assert_eq!(row.chars().count(), 62, "Misaligned row: {:?}", row);
    }
    assert!(stdout.contains("Parallelization depth: 4 | Work items: "));
}

#[test]
fn test_rejects_zero_board_size() {
    let output = run(&["0"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("board size must be at least 1"));
}

#[test]
fn test_rejects_zero_threads() {
    let output = run(&["8", "--threads", "0"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("thread count must be at least 1"));
}

#[test]
fn test_rejects_oversized_board() {
    let output = run(&["40", "-q"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds the supported maximum of 32"));
}
