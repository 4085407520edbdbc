use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::colors::ColorScheme;

pub const DEFAULT_INDENT: usize = 4;

const BULLET: &str = "\u{25cf}";

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\s*)[*\-0] ").expect("bullet pattern is valid")
    })
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Hex first: leftmost-first alternation would otherwise stop at "0".
    RE.get_or_init(|| {
        Regex::new(r"[+\-=]?(?:0x[0-9A-Fa-f]+|[0-9]\.?[0-9]*(?:e-?[0-9]+)?)")
            .expect("number pattern is valid")
    })
}

fn escape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\x1b\[[^m]*m").expect("escape pattern is valid")
    })
}

/// Lines starting with `|`, or with `x ` after indentation, are hidden unless
/// running verbose.
pub fn is_hidden(line: &str) -> bool {
    line.starts_with('|') || line.trim_start().starts_with("x ")
}

/// Turns raw note text into display lines.
pub struct Prettifier {
    scheme: ColorScheme,
    indent: usize,
}

impl Prettifier {
    pub fn new(scheme: ColorScheme, indent: usize) -> Self {
        Self { scheme, indent: indent.max(1) }
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Lazily render `text` line by line. Each call starts a fresh pass.
    pub fn render<'a>(
        &'a self,
        text: &'a str,
        verbose: bool,
    ) -> impl Iterator<Item = String> + 'a {
        text.lines()
            .filter(move |line| verbose || !is_hidden(line))
            .map(|line| self.prettify_line(line))
    }

    /// Bullet and number highlighting for one line. Numbers are found in the
    /// note text only, never inside the bullet's escape code.
    pub fn prettify_line(&self, line: &str) -> String {
        let Some(caps) = bullet_re().captures(line) else {
            return self.highlight_numbers(line);
        };
        let spaces = &caps[1];
        let tag = self.bullet_tag(spaces.chars().count());
        format!(
            "{}{}{}",
            spaces,
            self.scheme.colorize(tag, BULLET),
            self.highlight_numbers(&line[spaces.len() + 1..])
        )
    }

    fn bullet_tag(&self, depth: usize) -> &'static str {
        if depth > self.indent * 2 {
            "list4"
        } else if depth > self.indent {
            "list3"
        } else if depth > 0 {
            "list2"
        } else {
            "list"
        }
    }

    // Escape sequences already present in the note pass through untouched.
    fn highlight_numbers(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;
        for esc in escape_re().find_iter(line) {
            out.push_str(&self.highlight_plain(&line[last..esc.start()]));
            out.push_str(esc.as_str());
            last = esc.end();
        }
        out.push_str(&self.highlight_plain(&line[last..]));
        out
    }

    fn highlight_plain(&self, text: &str) -> String {
        number_re()
            .replace_all(text, |caps: &Captures| {
                self.scheme.colorize("number", &caps[0])
            })
            .into_owned()
    }
}
