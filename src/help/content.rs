use super::{HelpBook, HelpTopic, Section};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Exobrain markup syntax",
        usage: "exobrain [--edit | --path | --help-syntax] [--verbose] [-r <directory>] [note name]",
        topics: ALL_TOPICS,
        footer: &[
            "Notes are plain text; the markup only affects how `exobrain` displays them, never the file itself.",
        ],
    }
}

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "Bullets",
        summary: "List items start with `*`, `-` or `0` followed by a space.",
        details: &[
            "The marker is drawn as a colored dot. Its color follows the indentation: none, up to one indent unit, up to two, and deeper each get their own tag (list, list2, list3, list4).",
        ],
        section: Section::Markup,
        examples: &[
            "* groceries",
            "  - milk",
            "      - oat, not soy",
            "          * ask at the counter",
        ],
    },
    HelpTopic {
        name: "Numbers",
        summary: "Decimal, scientific and hexadecimal numbers are highlighted.",
        details: &[
            "An optional leading `+`, `-` or `=` is included in the highlight, so `x=5` and `-3.14e-2` light up as a whole. Hex literals need the `0x` prefix.",
        ],
        section: Section::Markup,
        examples: &["rent = 1200 due on the 3", "mask 0xFF, drift -3.14e-2"],
    },
    HelpTopic {
        name: "Hidden lines",
        summary: "Lines starting with `|`, or with `x ` after any indentation, are hidden.",
        details: &[
            "Use `x ` to tick off finished items and `|` for private asides. Pass -v to show them again.",
        ],
        section: Section::Markup,
        examples: &["x call the plumber", "|only visible with -v"],
    },
    HelpTopic {
        name: "EXOBRAIN_COLORS",
        summary: "Color scheme as `tag=code` pairs separated by `:` or newlines.",
        details: &[
            "Codes are ANSI SGR parameters, e.g. `list=38;5;37:number=1;33`. Tags: list, list2, list3, list4, number, error. Unknown tags render unstyled.",
        ],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "EXOBRAIN_INDENT",
        summary: "Width of one list nesting level (default 4).",
        details: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "EXOBRAIN_ROOT",
        summary: "Directory searched for notes (default ~/exobrain; -r overrides).",
        details: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "EDITOR",
        summary: "Command used by -e (falls back to VISUAL, then vim).",
        details: &[],
        section: Section::Environment,
        examples: &[],
    },
];
