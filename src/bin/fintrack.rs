use colored::Colorize;

fn main() {
    fintrack::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = fintrack::cli::run(&args) {
        eprintln!("{}", format!("error: {err}").red());
        std::process::exit(1);
    }
}
