use std::io::Write;

use yansi::Paint;

use crate::error::Result;
use crate::render::Prettifier;

mod content;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Markup,
    Environment,
}

impl Section {
    fn label(self) -> &'static str {
        match self {
            Section::Markup => "Markup",
            Section::Environment => "Environment",
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HelpTopic<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    pub details: &'a [&'a str],
    pub section: Section,
    pub examples: &'a [&'a str],
}

#[derive(Clone, Copy)]
pub(crate) struct HelpBook<'a> {
    pub title: &'a str,
    pub usage: &'a str,
    pub topics: &'a [HelpTopic<'a>],
    pub footer: &'a [&'a str],
}

impl<'a> HelpBook<'a> {
    fn in_section(
        &self,
        section: Section,
    ) -> impl Iterator<Item = &HelpTopic<'a>> {
        self.topics.iter().filter(move |t| t.section == section)
    }
}

/// Print the markup guide. Examples go through `prettifier` so they show the
/// active color scheme.
pub fn print_syntax(
    prettifier: &Prettifier,
    out: &mut impl Write,
) -> Result<()> {
    let width = terminal_columns().unwrap_or(96).clamp(64, 120);
    let printer = HelpPrinter::new(width);
    for line in printer.render(&content::book(), prettifier) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn terminal_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

struct HelpPrinter {
    width: usize,
}

impl HelpPrinter {
    fn new(width: usize) -> Self {
        Self { width }
    }

    fn render(
        &self,
        book: &HelpBook<'_>,
        prettifier: &Prettifier,
    ) -> Vec<String> {
        let mut out = Vec::new();
        out.push(book.title.bold().to_string());
        out.push(format!("usage: {}", book.usage));
        out.push(String::new());

        out.push(format!("{}:", Section::Markup.label()).bold().to_string());
        for topic in book.in_section(Section::Markup) {
            out.push(format!("  {}", topic.name.underline()));
            out.extend(self.indented(topic.summary, 4));
            for line in topic.details {
                out.extend(self.indented(line, 4));
            }
            if !topic.examples.is_empty() {
                out.push(String::new());
                let sample = topic.examples.join("\n");
                for line in prettifier.render(&sample, true) {
                    out.push(format!("      {line}"));
                }
            }
            out.push(String::new());
        }

        out.extend(self.env_table(book));

        for line in book.footer {
            out.extend(wrap_words(line, self.width));
        }
        out
    }

    fn indented(&self, text: &str, indent: usize) -> Vec<String> {
        let pad = " ".repeat(indent);
        wrap_words(text, self.width.saturating_sub(indent))
            .into_iter()
            .map(|l| format!("{pad}{l}"))
            .collect()
    }

    /// Variables in a name column; summary and details wrap beside it.
    fn env_table(&self, book: &HelpBook<'_>) -> Vec<String> {
        let vars: Vec<&HelpTopic<'_>> =
            book.in_section(Section::Environment).collect();
        if vars.is_empty() {
            return Vec::new();
        }
        let name_width = vars
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(0);
        let desc_width = self.width.saturating_sub(name_width + 4).max(24);

        let title = format!("{}:", Section::Environment.label());
        let mut out = vec![title.bold().to_string()];
        for var in vars {
            let mut text = var.summary.to_string();
            for extra in var.details {
                text.push(' ');
                text.push_str(extra);
            }
            let lines = wrap_words(&text, desc_width);
            for (idx, line) in lines.iter().enumerate() {
                let name = if idx == 0 { var.name } else { "" };
                out.push(format!("  {name:name_width$}  {line}"));
            }
        }
        out.push(String::new());
        out
    }
}

/// Greedy word wrap counted in chars. Always yields at least one line.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len > width {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        if used > 0 {
            line.push(' ');
            used += 1;
        }
        line.push_str(word);
        used += len;
    }
    lines.push(line);
    lines
}
