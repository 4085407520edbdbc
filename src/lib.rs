//! Find a note under the exobrain root by (partial) name, then show it with
//! lightweight highlighting or open it in an editor.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

pub mod args;
pub mod colors;
pub mod config;
pub mod error;
pub mod help;
pub mod operations;
pub mod render;
pub mod resolve;

pub use args::{Action, Cli};
pub use colors::ColorScheme;
pub use config::Config;
pub use error::{ExobrainError, Result};
pub use render::Prettifier;
pub use resolve::resolve_note;

pub fn entry() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // -r takes the place of EXOBRAIN_ROOT.
    let config = Config::from_lookup(|key| match (key, &cli.root) {
        ("EXOBRAIN_ROOT", Some(root)) => Some(root.clone()),
        _ => std::env::var(key).ok(),
    })?;
    if !config.use_color {
        yansi::disable();
    }

    Exobrain::new(config).run(cli.action(), &cli.note_name, cli.verbose)
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

pub struct Exobrain {
    config: Config,
    prettifier: Prettifier,
}

impl Exobrain {
    pub fn new(config: Config) -> Self {
        let scheme = ColorScheme::new(config.colors.clone())
            .with_color(config.use_color);
        let prettifier = Prettifier::new(scheme, config.indent);
        Self { config, prettifier }
    }

    pub fn run(&self, action: Action, name: &str, verbose: bool) -> Result<()> {
        match action {
            Action::Syntax => {
                help::print_syntax(&self.prettifier, &mut io::stdout().lock())
            }
            Action::Edit => {
                let path = self.edit_target(name)?;
                operations::edit_file(&self.config.editor, &path)
            }
            Action::Path => match self.find(name)? {
                Some(path) => {
                    println!("{}", path.display());
                    Ok(())
                }
                None => Ok(()),
            },
            Action::Show => match self.find(name)? {
                Some(path) => self.show(&path, verbose),
                None => Ok(()),
            },
        }
    }

    /// Resolve for viewing. A missing note is reported here and yields `None`.
    fn find(&self, name: &str) -> Result<Option<PathBuf>> {
        match resolve_note(&self.config.root, name) {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.is_not_found() => {
                let scheme = self.prettifier.scheme();
                eprintln!("{}", scheme.colorize("error", &err.to_string()));
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Missing notes are edited at `<root>/<name>` so they get created.
    fn edit_target(&self, name: &str) -> Result<PathBuf> {
        match resolve_note(&self.config.root, name) {
            Ok(path) => Ok(path),
            Err(err) if err.is_not_found() => {
                log::debug!("{err}; creating a new note");
                Ok(self.config.root.join(name))
            }
            Err(err) => Err(err),
        }
    }

    fn show(&self, path: &Path, verbose: bool) -> Result<()> {
        if operations::is_executable(path) {
            return operations::run_executable(path);
        }
        operations::show_note(
            path,
            &self.prettifier,
            verbose,
            &mut io::stdout().lock(),
        )
    }
}
