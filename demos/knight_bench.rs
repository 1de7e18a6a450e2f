//! Time the three frontier backends on a corner-to-corner search.
//!
//! Run: cargo run --bin knight-bench
//! Set `RUST_LOG=debug` to see per-backend enqueue counts on stderr.

use knight_demos::BenchConfig;

const START: &str = "A1";
const END: &str = "H8";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = BenchConfig::from_algebraic(START, END)?;
    let report = knight_demos::run(&config);
    print!("{report}");
    Ok(())
}
