use std::io;

fn main() {
    handrank_cli::logging::init_logging();
    let code = handrank_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
