fn main() {
    if let Err(err) = fauxdit::run() {
        eprintln!("{}", fauxdit::format_error(&err));
        std::process::exit(1);
    }
}
