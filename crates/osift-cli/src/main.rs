use osift_core::logging;

mod cli;

fn main() {
    // File logging under the XDG state dir; stderr if that is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. Only acquisition failure (retry budget spent)
    // reaches here as an error; everything else is reported with exit 0.
    if let Err(err) = cli::run_from_args() {
        eprintln!("osift error: {:#}", err);
        std::process::exit(1);
    }
}
