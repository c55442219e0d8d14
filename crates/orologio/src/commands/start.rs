/// Runs the clock in the foreground until Ctrl+C.
pub fn execute() {
    if let Err(e) = orologio_term::run::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
