use std::process::ExitCode;

fn main() -> ExitCode {
    match lazy_pipe::run(std::env::args().skip(1).peekable()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
