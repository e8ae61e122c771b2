//! Example: Dump a Safari cookie store as JSON.
//!
//! Usage: cargo run --example dump_cookies -- <path-to-Cookies.binarycookies>
//!
//! On macOS the store usually lives at
//! `~/Library/Containers/com.apple.Safari/Data/Library/Cookies/Cookies.binarycookies`.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dump_cookies <path-to-Cookies.binarycookies>");
        return ExitCode::FAILURE;
    };

    match binarycookies::parse_file(&path).await {
        Ok(cookies) => {
            println!("{}", serde_json::to_string_pretty(&cookies).unwrap());
            eprintln!("{} cookies", cookies.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to read {path}: {e}");
            ExitCode::FAILURE
        }
    }
}
