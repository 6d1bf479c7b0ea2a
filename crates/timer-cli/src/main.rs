//! timer - Milestone timer CLI
//!
//! Benchmark your dev projects milestone by milestone.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start timing a milestone
//! timer start "Testnet wallet MVP" --project "Stellar Wallet"
//!
//! # Stop it, with an optional note
//! timer stop --note "went fine"
//!
//! # Review time spent per project
//! timer summary --project "Stellar Wallet"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(commands::exit_code(&err));
    }
}
