use std::process::ExitCode;

fn main() -> ExitCode {
    match sweep_axis::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
