use std::io;

fn main() {
    flipseven_cli::logging::init_logging();
    let code = flipseven_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
