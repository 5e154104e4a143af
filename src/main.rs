use std::process;

fn main() {
    if let Err(e) = shtpl::cli::run() {
        eprintln!("\n{}", e);
        process::exit(1);
    }
}
