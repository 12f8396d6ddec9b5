use clap::{Parser, ValueEnum};
use queens::{
    solve, Progress, SearchPlan, SolutionReport, SolveObserver, SolveResult, SolverConfig,
    Strategy,
};
use std::io::{self, Write};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "queens")]
#[command(
    about = "Solve the N-Queens problem with multi-threaded backtracking and symmetry detection"
)]
#[command(version)]
struct Args {
    /// Board size N
    #[arg(default_value = "8")]
    n: usize,
    /// Number of worker threads (default: number of CPU cores)
    #[arg(long, short = 't')]
    threads: Option<usize>,
    /// Don't print individual solutions, only the final summary
    #[arg(long, short)]
    quiet: bool,
    /// Show a progress bar on stderr while solving
    #[arg(long, short)]
    progress: bool,
    /// Execution strategy
    #[arg(long, value_enum, default_value = "parallel")]
    strategy: CliStrategy,
    /// Row depth at which the search tree is split into work items
    #[arg(long)]
    split_depth: Option<usize>,
    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

/// CLI strategy selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    /// Split the search tree across a pool of worker threads
    Parallel,
    /// Single-threaded search with reproducible unique ids
    Sequential,
}

impl From<CliStrategy> for Strategy {
    fn from(cli: CliStrategy) -> Self {
        match cli {
            CliStrategy::Parallel => Strategy::Parallel,
            CliStrategy::Sequential => Strategy::Sequential,
        }
    }
}

// --- Logging ---

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("queens=debug")
        } else {
            EnvFilter::new("queens=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// --- Rendering ---

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────";
const PROGRESS_BAR_WIDTH: usize = 30;
const BOX_WIDTH: usize = 60;

/// In-place progress bar on stderr.
struct ProgressBar {
    drawn: bool,
}

impl ProgressBar {
    fn new() -> Self {
        Self { drawn: false }
    }

    fn draw(&mut self, progress: Progress) {
        let percent = progress.percent();
        let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64) as usize;
        let bar: String = (0..PROGRESS_BAR_WIDTH)
            .map(|i| if i < filled { '=' } else { ' ' })
            .collect();
        let mut stderr = io::stderr().lock();
        let _ = write!(
            stderr,
            "\r[{}] {:.1}% ({}/{})",
            bar, percent, progress.completed, progress.total
        );
        let _ = stderr.flush();
        self.drawn = true;
    }

    /// Overwrite the bar with blanks.
    fn clear(&mut self) {
        if self.drawn {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "\r{:<60}\r", "");
            let _ = stderr.flush();
            self.drawn = false;
        }
    }
}

/// Prints the banner and solutions to stdout and progress to stderr.
struct ConsoleReporter {
    print_solutions: bool,
    progress_bar: Option<ProgressBar>,
}

impl SolveObserver for ConsoleReporter {
    fn on_start(&mut self, plan: &SearchPlan) {
        print_banner(plan, self.print_solutions, self.progress_bar.is_some());
    }

    fn on_solution(&mut self, report: &SolutionReport<'_>) {
        let mut stdout = io::stdout().lock();
        let result = if report.is_unique {
            writeln!(
                stdout,
                "\n{}\nSolution #{} (UNIQUE #{})\n{}",
                HEAVY_RULE, report.sequence, report.unique_id, HEAVY_RULE
            )
        } else {
            writeln!(
                stdout,
                "\n{}\nSolution #{} (variant of Unique #{})\n{}",
                LIGHT_RULE, report.sequence, report.unique_id, LIGHT_RULE
            )
        };
        // A closed stdout (e.g. piped into `head`) is not worth aborting for.
        let _ = result.and_then(|_| write!(stdout, "{}", report.board));
    }

    fn on_progress(&mut self, progress: Progress) {
        if let Some(bar) = self.progress_bar.as_mut() {
            bar.draw(progress);
        }
    }
}

/// One row of a box, padded to the closing border.
fn box_line(text: &str) -> String {
    format!("║{:<width$}║", text, width = BOX_WIDTH)
}

fn print_banner(plan: &SearchPlan, print_solutions: bool, progress: bool) {
    let reporting = if print_solutions { "Printing" } else { "Suppressing" };

    println!("╔{}╗", "═".repeat(BOX_WIDTH));
    println!(
        "{}",
        box_line(&format!(
            "  UNIQUE SOLUTIONS (ACCOUNTING FOR SYMMETRY)  QUEENS-{}",
            plan.board_size
        ))
    );
    println!("{}", box_line("  Solutions that are the same after rotation or reflection"));
    println!("{}", box_line("  are counted as one unique solution"));
    println!("{}", box_line(&format!("  Detected {} CPU core(s)", num_cpus::get())));
    match plan.strategy {
        Strategy::Parallel => {
            println!(
                "{}",
                box_line(&format!(
                    "  Using {} thread(s) | {} intermediate solutions",
                    plan.workers, reporting
                ))
            );
            println!(
                "{}",
                box_line(&format!(
                    "  Parallelization depth: {} | Work items: {}",
                    plan.split_depth, plan.work_items
                ))
            );
        }
        Strategy::Sequential => println!(
            "{}",
            box_line(&format!(
                "  Sequential search | {} intermediate solutions",
                reporting
            ))
        ),
    }
    if progress {
        println!("{}", box_line("  Progress tracking: ENABLED"));
    }
    println!("╚{}╝\n", "═".repeat(BOX_WIDTH));
}

fn print_summary(result: &SolveResult) {
    println!("\nTime: {:.6} seconds", result.statistics.elapsed_time.as_secs_f64());
    println!("\n╔{}╗", "═".repeat(BOX_WIDTH));
    println!(
        "{}",
        box_line(&format!(" Total solutions found:          {}", result.total_solutions))
    );
    println!(
        "{}",
        box_line(&format!(" Unique solutions (no symmetry): {}", result.unique_solutions))
    );
    if let Some(reduction) = result.reduction_percent() {
        println!("{}", box_line(&format!(" Reduction: {:.1}%", reduction)));
    }
    println!("╚{}╝", "═".repeat(BOX_WIDTH));
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let config = SolverConfig::new(args.n)
        .with_workers_option(args.threads)
        .with_split_depth_option(args.split_depth)
        .with_strategy(args.strategy.into())
        .with_solution_reports(!args.quiet)
        .with_progress(args.progress);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut reporter = ConsoleReporter {
        print_solutions: config.report_solutions,
        progress_bar: args.progress.then(ProgressBar::new),
    };

    let outcome = solve(&config, &mut reporter);
    if let Some(bar) = reporter.progress_bar.as_mut() {
        bar.clear();
    }

    match outcome {
        Ok(result) => print_summary(&result),
        Err(e) => {
            eprintln!("Error during search: {}", e);
            std::process::exit(1);
        }
    }
}
