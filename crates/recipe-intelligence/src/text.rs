// ABOUTME: Text normalization and keyword matching shared by all recipe analyzers
// ABOUTME: Normalizes ingredient/step text, splits steps, and finds vocabulary keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Keyword matching over free text.
//!
//! All lookups run on [`normalize`]d text: lowercase, punctuation replaced by
//! spaces, whitespace collapsed. A keyword matches when it starts at a word
//! boundary and the rest of the word is an ordinary English inflection
//! ("bake" matches "baked" and "baking" but "temper" does not match
//! "temperature").

use regex::Regex;
use std::sync::LazyLock;

/// Numbers and vulgar fractions left over after normalization ("1 1 2 cups" from "1 1/2 cups"),
/// including numbers glued to a metric or imperial unit ("200g")
static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:g|kg|mg|ml|l|oz|lbs?)?\b|[½¼¾⅓⅔⅛⅜⅝⅞]").ok()
});

/// Measurement units and container words that never identify an ingredient
static UNIT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:cups?|c|tbsps?|tablespoons?|tsps?|teaspoons?|g|grams?|kg|kilograms?|mg|ml|milliliters?|millilitres?|l|liters?|litres?|oz|ounces?|lbs?|pounds?|pinch(?:es)?|dash(?:es)?|cans?|jars?|packages?|packets?|handfuls?|sticks?|slices?|pieces?|x)\b",
    )
    .ok()
});

/// Suffixes accepted after a keyword that is otherwise a word prefix
const INFLECTION_SUFFIXES: &[&str] = &["", "s", "es", "d", "ed", "ing"];

/// Lowercase, replace every non-alphanumeric character with a space, collapse whitespace
#[must_use]
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an ingredient line and drop quantities and measurement units
///
/// `"1 1/2 cups all-purpose flour"` becomes `"all purpose flour"`.
#[must_use]
pub fn strip_quantities(text: &str) -> String {
    let mut normalized = normalize(text);
    for pattern in [&*QUANTITY_PATTERN, &*UNIT_PATTERN].into_iter().flatten() {
        normalized = pattern.replace_all(&normalized, " ").into_owned();
    }
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Byte offset of the first occurrence of `keyword` in `haystack`, if any
///
/// Both arguments must already be normalized.
#[must_use]
pub fn find_keyword(haystack: &str, keyword: &str) -> Option<usize> {
    if keyword.is_empty() {
        return None;
    }

    let mut best: Option<usize> = None;
    for (stem, suffixes) in stems(keyword) {
        if let Some(position) = find_stem(haystack, &stem, &suffixes) {
            best = Some(best.map_or(position, |current| current.min(position)));
        }
    }
    best
}

/// Whether `keyword` occurs in `haystack` (both normalized)
#[must_use]
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    find_keyword(haystack, keyword).is_some()
}

/// Stem/suffix combinations to search for a keyword
///
/// Besides the keyword itself this covers a doubled final consonant
/// ("chop" → "chopped"), a dropped final `e` ("bake" → "baking") and `y` → `i`
/// ("fry" → "fried").
fn stems(keyword: &str) -> Vec<(String, Vec<String>)> {
    let base: Vec<String> = INFLECTION_SUFFIXES.iter().map(|s| (*s).to_owned()).collect();
    let mut stems = vec![(keyword.to_owned(), base)];

    if let Some(last) = keyword.chars().last() {
        if last.is_alphabetic() && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'w' | 'x') {
            stems.push((
                keyword.to_owned(),
                vec![format!("{last}ed"), format!("{last}ing")],
            ));
        }
        if last == 'e' && keyword.len() > 2 {
            let stem = &keyword[..keyword.len() - 1];
            stems.push((stem.to_owned(), vec!["ing".to_owned()]));
        }
        if last == 'y' && keyword.len() > 2 {
            let stem = &keyword[..keyword.len() - 1];
            stems.push((stem.to_owned(), vec!["ied".to_owned(), "ies".to_owned()]));
        }
    }

    stems
}

fn find_stem(haystack: &str, stem: &str, suffixes: &[String]) -> Option<usize> {
    haystack.match_indices(stem).find_map(|(start, _)| {
        let at_word_start = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        if !at_word_start {
            return None;
        }
        let rest: String = haystack[start + stem.len()..]
            .chars()
            .take_while(|c| c.is_alphanumeric())
            .collect();
        suffixes.iter().any(|s| *s == rest).then_some(start)
    })
}

/// Split free-text steps into individual step segments
///
/// Boundaries are newlines, `!`, `?`, `;` and `.` unless the `.` sits between
/// two digits ("2.5 cups"). Only segments containing a letter count, so list
/// markers such as `1.` or `2)` never become steps on their own.
#[must_use]
pub fn split_steps(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut segments = Vec::new();
    let mut start = 0;

    for (index, &(offset, c)) in chars.iter().enumerate() {
        let boundary = match c {
            '\n' | '\r' | '!' | '?' | ';' => true,
            '.' => {
                let prev_digit = index > 0 && chars[index - 1].1.is_ascii_digit();
                let next_digit = chars.get(index + 1).is_some_and(|(_, n)| n.is_ascii_digit());
                !(prev_digit && next_digit)
            }
            _ => false,
        };
        if boundary {
            push_segment(&mut segments, &text[start..offset]);
            start = offset + c.len_utf8();
        }
    }
    push_segment(&mut segments, &text[start..]);

    segments
}

fn push_segment<'a>(segments: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if trimmed.chars().any(char::is_alphabetic) {
        segments.push(trimmed);
    }
}

/// `haystack` with every normalized phrase replaced by a space
///
/// Used to fold out fixed phrases (e.g. "baking powder") before keyword scans.
#[must_use]
pub fn strip_phrases(haystack: &str, phrases: &[String]) -> String {
    phrases
        .iter()
        .map(|phrase| normalize(phrase))
        .filter(|phrase| !phrase.is_empty())
        .fold(haystack.to_owned(), |acc, phrase| acc.replace(&phrase, " "))
}

/// Entries of a keyword vocabulary table
pub trait Keyword {
    /// The vocabulary term, as configured
    fn keyword(&self) -> &str;
}

/// Most specific table entry found in `haystack`
///
/// The longest keyword wins; among equal lengths the entry listed first wins.
#[must_use]
pub fn longest_match<'a, T: Keyword>(haystack: &str, table: &'a [T]) -> Option<&'a T> {
    let mut best: Option<(&T, usize)> = None;
    for entry in table {
        let keyword = normalize(entry.keyword());
        if !contains_keyword(haystack, &keyword) {
            continue;
        }
        let length = keyword.chars().count();
        if best.is_none_or(|(_, best_length)| length > best_length) {
            best = Some((entry, length));
        }
    }
    best.map(|(entry, _)| entry)
}

/// Every table entry found in `haystack`, ordered by first appearance
///
/// Entries appearing at the same offset keep table order.
#[must_use]
pub fn matches_in_order<'a, T: Keyword>(haystack: &str, table: &'a [T]) -> Vec<&'a T> {
    let mut found: Vec<(usize, usize, &T)> = table
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            find_keyword(haystack, &normalize(entry.keyword())).map(|offset| (offset, index, entry))
        })
        .collect();
    found.sort_by_key(|&(offset, index, _)| (offset, index));
    found.into_iter().map(|(_, _, entry)| entry).collect()
}

impl Keyword for String {
    fn keyword(&self) -> &str {
        self
    }
}

/// Append `item` unless an equal item is already present
pub fn push_unique(items: &mut Vec<String>, item: &str) {
    if !item.is_empty() && !items.iter().any(|existing| existing == item) {
        items.push(item.to_owned());
    }
}
