use std::process;

fn main() {
    // Argument errors exit through clap with the usage error code (2);
    // anything past parsing is a core failure and exits 1.
    if let Err(err) = boardbrew::cli::run() {
        eprintln!("❌ Error: {:#}", err);
        process::exit(1);
    }
}
