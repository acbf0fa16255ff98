//! Binary entrypoint for relocale-cli.

fn main() {
    if let Err(err) = relocale_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
