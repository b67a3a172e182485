use std::io;

fn main() {
    rojak_cli::logging::init_logging();
    let code = rojak_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
