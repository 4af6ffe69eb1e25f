//! Dew's Potion Emporium terminal app entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match emporium_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
