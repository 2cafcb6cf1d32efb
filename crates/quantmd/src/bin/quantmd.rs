fn main() {
    if let Err(err) = quantmd::run() {
        eprintln!("{}", quantmd::format_error(&err));
        std::process::exit(1);
    }
}
