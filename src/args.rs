use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "exobrain",
    version,
    about = "Find a note by name and show or edit it"
)]
pub struct Cli {
    /// Note name or a fragment of it
    #[arg(value_name = "NOTE", default_value = "default")]
    pub note_name: String,

    /// Edit the given note
    #[arg(
        short = 'e',
        long = "edit",
        conflicts_with_all = ["help_syntax", "path"]
    )]
    pub edit: bool,

    /// Print information on the markup syntax
    #[arg(long = "help-syntax", conflicts_with = "path")]
    pub help_syntax: bool,

    /// Print the resolved path instead of the note
    #[arg(short = 'p', long = "path")]
    pub path: bool,

    /// Change the root directory
    #[arg(short = 'r', value_name = "directory")]
    pub root: Option<String>,

    /// Show hidden lines
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show,
    Edit,
    Path,
    Syntax,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.help_syntax {
            Action::Syntax
        } else if self.edit {
            Action::Edit
        } else if self.path {
            Action::Path
        } else {
            Action::Show
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let argv = std::iter::once("exobrain").chain(args.iter().copied());
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.note_name, "default");
        assert_eq!(cli.action(), Action::Show);
        assert!(!cli.verbose);
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_edit_with_root_and_verbose() {
        let cli = parse(&["-e", "-r", "/tmp/notes", "-v", "todo"]).unwrap();
        assert_eq!(cli.note_name, "todo");
        assert_eq!(cli.action(), Action::Edit);
        assert_eq!(cli.root.as_deref(), Some("/tmp/notes"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_help_syntax_and_path_actions() {
        assert_eq!(parse(&["--help-syntax"]).unwrap().action(), Action::Syntax);
        assert_eq!(parse(&["-p", "todo"]).unwrap().action(), Action::Path);
    }

    #[test]
    fn test_actions_are_exclusive() {
        assert!(parse(&["-e", "--help-syntax"]).is_err());
        assert!(parse(&["-e", "-p"]).is_err());
        assert!(parse(&["--help-syntax", "--path"]).is_err());
    }
}
