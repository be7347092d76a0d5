use std::borrow::Cow;

use log::debug;
use regex::RegexBuilder;

use crate::config::Config;
use crate::types::{Context, Direction, Span, Toggle};

/// Resolves the toggle for a context against the configured groups.
///
/// Groups are scanned in configured order and words within a group in
/// their configured order; the first case-insensitive match wins. There is
/// no scoring and no longest-match preference. Direction only changes the
/// index arithmetic, never which group matches.
///
/// With a [`Context::Line`], each configured word is searched for as an
/// escaped, case-insensitive literal and the first occurrence containing
/// the cursor is adopted as the search word. Occurrences are plain literal
/// matches, not word-boundary-delimited, so configured words may contain
/// punctuation (`test.only`, `'`).
///
/// No match is a normal outcome: the returned [`Toggle`] simply carries no
/// replacement.
pub fn resolve(config: &Config, context: Context<'_>, direction: Direction) -> Toggle {
    let selected = matches!(context, Context::Selection(_));
    let toggle = Toggle::none(selected);

    for group in config.groups() {
        let words = group.words();

        for (index, configured) in words.iter().enumerate() {
            // Malformed configurations may contain empty words; skip them
            // rather than fail.
            if configured.is_empty() {
                continue;
            }

            let (word, span): (Cow<'_, str>, Option<Span>) = match context {
                Context::Selection(text) => (Cow::Borrowed(text), None),
                Context::Line { text, cursor } => {
                    match occurrence_at_cursor(configured, text, cursor) {
                        Some((span, matched)) => (Cow::Owned(matched), Some(span)),
                        None => continue,
                    }
                }
            };

            if word.to_lowercase() != configured.to_lowercase() {
                continue;
            }

            let next = &words[next_index(direction, index, words.len())];

            // An empty word in the next slot aborts the whole resolution
            // instead of falling through to later groups.
            if next.is_empty() {
                debug!("toggle for {word:?} aborted: next slot is empty");
                return toggle;
            }

            let replacement = recase(&word, configured, next);
            debug!("toggled {word:?} -> {replacement:?}");

            return Toggle {
                selected,
                range: span,
                replacement: Some(replacement),
            };
        }
    }

    debug!("no toggle found");
    toggle
}

fn next_index(direction: Direction, index: usize, len: usize) -> usize {
    match direction {
        Direction::Forward => (index + 1) % len,
        Direction::Reverse => (index + len - 1) % len,
    }
}

/// Scans `line` for case-insensitive literal occurrences of `word` and
/// returns the first one whose span contains `cursor`, along with the
/// matched text.
fn occurrence_at_cursor(word: &str, line: &str, cursor: usize) -> Option<(Span, String)> {
    let pattern = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
        .ok()?;

    for m in pattern.find_iter(line) {
        let span = Span {
            start: m.start(),
            end: m.end(),
        };

        if span.contains(cursor) {
            return Some((span, m.as_str().to_owned()));
        }
    }

    None
}

/// Applies the matched word's case to the replacement.
///
/// The case is inferred by comparing the matched text against the
/// configured word's lowercase, uppercase, and capitalized forms, first
/// match wins. A replacement that already contains an uppercase letter is
/// used verbatim so camel-case words are never folded. Symbol-only words
/// satisfy the lowercase check trivially and map through unchanged, since
/// the transforms are identity on non-letters.
fn recase(word: &str, configured: &str, replacement: &str) -> String {
    if replacement.chars().any(char::is_uppercase) {
        return replacement.to_owned();
    }

    if word == configured.to_lowercase() {
        replacement.to_lowercase()
    } else if word == configured.to_uppercase() {
        replacement.to_uppercase()
    } else if word == capitalize(configured) {
        capitalize(replacement)
    } else {
        replacement.to_owned()
    }
}

/// Uppercases the first character and lowercases the remainder.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
