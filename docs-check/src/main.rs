// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

mod cli;

/// Exit status when at least one violation was found.
const EXIT_VIOLATIONS: i32 = 1;
/// Exit status when a check could not run at all.
const EXIT_ERROR: i32 = 2;

fn main() {
    match cli::run() {
        Ok(cli::Outcome::Passed) => {}
        Ok(cli::Outcome::Violations) => std::process::exit(EXIT_VIOLATIONS),
        Ok(cli::Outcome::Failed) => std::process::exit(EXIT_ERROR),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}
