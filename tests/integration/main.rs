mod cli_test;
mod solve_test;
