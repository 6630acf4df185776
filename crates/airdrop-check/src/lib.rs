//! Batch airdrop eligibility checker.
//!
//! Reads a newline-delimited list of private keys / addresses, runs each
//! wallet through parse → (Solana: authenticate) → eligibility lookup,
//! and writes a JSON run summary. Wallets are processed in fixed-size
//! windows with a pause between windows to stay under the service's
//! rate limits; results come back in input order regardless of how the
//! network calls interleave.

pub mod input;
pub mod pipeline;
pub mod report;
pub mod runner;
