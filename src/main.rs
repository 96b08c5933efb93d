use std::process::ExitCode;

fn main() -> ExitCode {
    twitch::cli::main()
}
