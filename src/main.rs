fn main() {
    if let Err(err) = exobrain::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
