//! Pattern scanning — one pass turns the pattern string into tokens so the
//! hot path never re-parses it.
//!
//! Grammar: `%` `-`?digits? `.`digits? conv `{`specifier`}`? for directives,
//! maximal `%`-free runs for literals. The conversion set is closed; a `%`
//! followed by anything else is not a directive and is preserved as literal
//! text.

use crate::internal;
use regex::Regex;
use std::sync::LazyLock;

/// Mirrors the grammar: optional signed padding, optional `.`-prefixed
/// truncation, one conversion character, optional brace specifier — or a
/// literal run with no `%`.
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(-?\d+)?(\.\d+)?([\[\]cdmnpr%])(\{([^}]+)\})?|[^%]+")
        .expect("Invalid directive regex")
});

/// Closed set of conversion characters — rendering matches on it
/// exhaustively, so no fallback arm is ever reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conv {
    /// `%c` — category name, optionally cut to the last N dot segments.
    Category,
    /// `%d` — start time through a date format template.
    Date,
    /// `%m` — the event's argument list through the message formatter.
    Message,
    /// `%n` — the configured line separator.
    Newline,
    /// `%p` — level name, uppercased.
    Level,
    /// `%r` — time of day.
    Time,
    /// `%[` — opens a color region; renders empty (styling is a no-op).
    ColorStart,
    /// `%]` — closes a color region; renders empty.
    ColorEnd,
    /// `%%` — a literal percent sign.
    Percent,
}

impl Conv {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(Self::Category),
            'd' => Some(Self::Date),
            'm' => Some(Self::Message),
            'n' => Some(Self::Newline),
            'p' => Some(Self::Level),
            'r' => Some(Self::Time),
            '[' => Some(Self::ColorStart),
            ']' => Some(Self::ColorEnd),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }
}

/// Which side the fill spaces go on — `%-5p` right-pads, `%5p` left-pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Leading `-`: value sticks to the left, spaces appended.
    Left,
    /// No sign: value sticks to the right, spaces prepended.
    Right,
}

/// Minimum-width rule for one directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub width: usize,
    pub align: Alignment,
}

/// One unit of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Copied to the output untouched — padding and truncation never apply.
    Literal(String),
    /// Rendered per event, then truncated and padded in that order.
    Directive {
        conv: Conv,
        padding: Option<Padding>,
        truncation: Option<usize>,
        specifier: Option<String>,
    },
}

/// Compiles a pattern string into tokens.
///
/// Malformed digit runs (width or truncation too large for `usize`) degrade
/// to "absent" rather than failing; text that matches neither grammar
/// alternative is preserved as literal output.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pos = 0;

    for caps in DIRECTIVE_REGEX.captures_iter(pattern) {
        let Some(whole) = caps.get(0) else { continue };

        if whole.start() > pos {
            // Stray `%` sequence outside the grammar, e.g. `%x`.
            let skipped = &pattern[pos..whole.start()];
            internal::trace("token", &format!("preserving non-directive text {skipped:?}"));
            push_literal(&mut tokens, skipped);
        }
        pos = whole.end();

        let conv = caps
            .get(3)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Conv::from_char);

        let Some(conv) = conv else {
            push_literal(&mut tokens, whole.as_str());
            continue;
        };

        tokens.push(Token::Directive {
            conv,
            padding: caps.get(1).and_then(|m| parse_padding(m.as_str())),
            truncation: caps.get(2).and_then(|m| parse_truncation(m.as_str())),
            specifier: caps.get(5).map(|m| m.as_str().to_string()),
        });
    }

    if pos < pattern.len() {
        // A trailing `%` reaches here: nothing after it to anchor a match.
        let tail = &pattern[pos..];
        internal::trace("token", &format!("preserving trailing text {tail:?}"));
        push_literal(&mut tokens, tail);
    }

    tokens
}

/// Adjacent literal fragments merge so the token stream stays minimal.
fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(prev)) = tokens.last_mut() {
        prev.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn parse_padding(spec: &str) -> Option<Padding> {
    let (align, digits) = spec.strip_prefix('-').map_or(
        (Alignment::Right, spec),
        |rest| (Alignment::Left, rest),
    );

    match digits.parse() {
        Ok(width) => Some(Padding { width, align }),
        Err(_) => {
            internal::trace("token", &format!("ignoring unparseable padding {spec:?}"));
            None
        }
    }
}

fn parse_truncation(spec: &str) -> Option<usize> {
    // Leading `.` was consumed into the capture.
    match spec.trim_start_matches('.').parse() {
        Ok(limit) => Some(limit),
        Err(_) => {
            internal::trace("token", &format!("ignoring unparseable truncation {spec:?}"));
            None
        }
    }
}
