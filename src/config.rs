use std::path::{Path, PathBuf};

use crate::colors::DEFAULT_COLORS;
use crate::error::{ExobrainError, Result};
use crate::render::DEFAULT_INDENT;

pub const DEFAULT_ROOT: &str = "~/exobrain";
pub const DEFAULT_EDITOR: &str = "vim";

/// Settings resolved once at startup. Nothing reads the environment after
/// this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub colors: String,
    pub indent: usize,
    pub editor: String,
    pub use_color: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let home = get("HOME").map(PathBuf::from);
        let root_raw =
            get("EXOBRAIN_ROOT").unwrap_or_else(|| DEFAULT_ROOT.to_string());
        let root = expand_home(&root_raw, home.as_deref())?;

        let indent = match get("EXOBRAIN_INDENT") {
            Some(raw) => parse_indent(&raw)?,
            None => DEFAULT_INDENT,
        };

        let config = Self {
            root,
            colors: get("EXOBRAIN_COLORS")
                .unwrap_or_else(|| DEFAULT_COLORS.to_string()),
            indent,
            editor: get("EDITOR")
                .or_else(|| get("VISUAL"))
                .unwrap_or_else(|| DEFAULT_EDITOR.to_string()),
            use_color: lookup("NO_COLOR").is_none(),
        };
        log::debug!(
            "config: root={} indent={} editor={:?} color={}",
            config.root.display(),
            config.indent,
            config.editor,
            config.use_color
        );
        Ok(config)
    }
}

fn parse_indent(raw: &str) -> Result<usize> {
    let invalid = |reason: &str| ExobrainError::InvalidConfig {
        var: "EXOBRAIN_INDENT",
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let indent: usize =
        raw.trim().parse().map_err(|_| invalid("expected a positive integer"))?;
    if indent == 0 {
        return Err(invalid("must be at least 1"));
    }
    Ok(indent)
}

pub fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(raw));
    };
    let home = home.ok_or(ExobrainError::MissingHome)?;
    Ok(if rest.is_empty() { home.to_path_buf() } else { home.join(rest) })
}
