//! Short binary name (`exo`) that forwards to the `exobrain` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = exobrain::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
