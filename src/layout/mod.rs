//! The compiled layout: pattern text goes in once, events go through many
//! times. Tokenizing and rendering are split so the per-event path does no
//! parsing at all.

pub mod message;
pub mod token;

use crate::date;
use crate::event::LogEvent;
use self::token::{Alignment, Conv, Padding, Token};

/// The classic TTCC arrangement — time, level, category, message.
pub const DEFAULT_PATTERN: &str = "%r %p %c - %m%n";

/// A pattern compiled to tokens plus the injected line separator.
///
/// Immutable after construction; formatting is a pure function of the layout
/// and the event, so one instance is safe to share across threads.
#[derive(Debug, Clone)]
pub struct PatternLayout {
    tokens: Vec<Token>,
    eol: String,
}

impl Default for PatternLayout {
    /// The default pattern covers the common "readable line per event" case.
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl PatternLayout {
    /// Compiles the pattern once; the result is reused for every event.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            tokens: token::tokenize(pattern),
            eol: default_eol().to_string(),
        }
    }

    /// `%n` resolves to this value. The separator is injected here instead
    /// of read from ambient state, so embedders control it per layout.
    #[must_use]
    pub fn eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }

    /// Tests and diagnostics need to see what the pattern compiled to.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Renders one event — the hot path for every log line.
    #[must_use]
    pub fn format(&self, event: &LogEvent) -> String {
        let mut out = String::new();

        for tok in &self.tokens {
            match tok {
                Token::Literal(text) => out.push_str(text),
                Token::Directive {
                    conv,
                    padding,
                    truncation,
                    specifier,
                } => {
                    let raw = self.replacement(*conv, specifier.as_deref(), event);
                    out.push_str(&post_process(raw, *truncation, *padding));
                }
            }
        }

        out
    }

    fn replacement(&self, conv: Conv, specifier: Option<&str>, event: &LogEvent) -> String {
        match conv {
            Conv::Category => category_name(&event.category_name, specifier),
            Conv::Date => {
                let template = specifier.map_or(date::ISO8601_FORMAT, date::resolve);
                date::as_string(template, &event.start_time)
            }
            Conv::Message => message::format_data(&event.data),
            Conv::Newline => self.eol.clone(),
            Conv::Level => event.level.to_uppercase(),
            Conv::Time => date::locale_time(&event.start_time),
            Conv::ColorStart | Conv::ColorEnd => String::new(),
            Conv::Percent => "%".to_string(),
        }
    }
}

/// Resolved at compile time for the target platform; `eol()` overrides it.
const fn default_eol() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

/// `%c{N}` keeps the last N dot segments; N at or above the segment count,
/// or a specifier that is not an integer, leaves the name whole.
fn category_name(full: &str, specifier: Option<&str>) -> String {
    let Some(precision) = specifier.and_then(|s| s.parse::<usize>().ok()) else {
        return full.to_string();
    };

    let segments: Vec<&str> = full.split('.').collect();
    if precision >= segments.len() {
        full.to_string()
    } else {
        segments[segments.len() - precision..].join(".")
    }
}

/// Truncation first, then padding: `%5.2p` on `ERROR` is `"   ER"`, not a
/// padded five-char slice. Truncation never pads, padding never shortens.
fn post_process(mut replacement: String, truncation: Option<usize>, padding: Option<Padding>) -> String {
    if let Some(limit) = truncation
        && let Some((idx, _)) = replacement.char_indices().nth(limit)
    {
        replacement.truncate(idx);
    }

    if let Some(Padding { width, align }) = padding {
        let len = replacement.chars().count();
        if len < width {
            let fill = " ".repeat(width - len);
            match align {
                Alignment::Left => replacement.push_str(&fill),
                Alignment::Right => replacement.insert_str(0, &fill),
            }
        }
    }

    replacement
}
