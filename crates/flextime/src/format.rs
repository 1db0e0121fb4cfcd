//! Template-token translation.
//!
//! Templates use single-letter PHP-style `date()` tokens (`Y-m-d H:i:s` and
//! friends). Each token maps to its strftime equivalent for chrono and to
//! the shape it takes in running text for free-text search. The table is the
//! single place a new token is added; everything else is table-driven.

use crate::error::{Result, TimeError};

struct Token {
    letter: char,
    strftime: &'static str,
    pattern: &'static str,
}

/// Token table, one entry per template letter.
const TOKENS: &[Token] = &[
    // Date
    Token { letter: 'Y', strftime: "%Y", pattern: r"\d{4}" },
    Token { letter: 'y', strftime: "%y", pattern: r"\d{2}" },
    Token { letter: 'm', strftime: "%m", pattern: r"\d{2}" },
    Token { letter: 'n', strftime: "%-m", pattern: r"\d{1,2}" },
    Token { letter: 'd', strftime: "%d", pattern: r"\d{2}" },
    Token { letter: 'j', strftime: "%-d", pattern: r"\d{1,2}" },
    Token { letter: 'D', strftime: "%a", pattern: r"[A-Za-z]{3}" },
    Token { letter: 'l', strftime: "%A", pattern: r"[A-Za-z]+" },
    Token { letter: 'M', strftime: "%b", pattern: r"[A-Za-z]{3}" },
    Token { letter: 'F', strftime: "%B", pattern: r"[A-Za-z]+" },
    // Time
    Token { letter: 'H', strftime: "%H", pattern: r"\d{2}" },
    Token { letter: 'G', strftime: "%-H", pattern: r"\d{1,2}" },
    Token { letter: 'h', strftime: "%I", pattern: r"\d{2}" },
    Token { letter: 'g', strftime: "%-I", pattern: r"\d{1,2}" },
    Token { letter: 'i', strftime: "%M", pattern: r"\d{2}" },
    Token { letter: 's', strftime: "%S", pattern: r"\d{2}" },
    Token { letter: 'u', strftime: "%6f", pattern: r"\d{1,6}" },
    Token { letter: 'a', strftime: "%P", pattern: r"[ap]m" },
    Token { letter: 'A', strftime: "%p", pattern: r"[AP]M" },
    // Offset / epoch
    Token { letter: 'O', strftime: "%z", pattern: r"[+-]\d{4}" },
    Token { letter: 'P', strftime: "%:z", pattern: r"[+-]\d{2}:\d{2}" },
    Token { letter: 'U', strftime: "%s", pattern: r"\d+" },
];

fn token(letter: char) -> Option<&'static Token> {
    TOKENS.iter().find(|t| t.letter == letter)
}

/// Translate a template into a strftime layout string.
///
/// `\` escapes the next character as a literal; characters that are not
/// tokens pass through unchanged.
///
/// # Errors
///
/// Returns [`TimeError::Format`] if no token at all is recognized — such a
/// template cannot describe a date or time.
pub fn to_strftime(template: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len() * 2);
    let mut recognized = 0usize;
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                push_literal(&mut out, escaped);
            }
            continue;
        }
        match token(ch) {
            Some(t) => {
                out.push_str(t.strftime);
                recognized += 1;
            }
            None => push_literal(&mut out, ch),
        }
    }
    if recognized == 0 {
        return Err(TimeError::Format(format!(
            "no recognized tokens in '{template}'"
        )));
    }
    Ok(out)
}

// '%' has meaning to strftime, nothing else does.
fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

/// Build a regex source matching the template's shape in running text.
///
/// `None` when the template contains no recognizable tokens, in which case
/// it can match no substring.
pub(crate) fn to_search_pattern(template: &str) -> Option<String> {
    let mut out = String::with_capacity(template.len() * 4);
    let mut recognized = 0usize;
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push_str(&regex::escape(&escaped.to_string()));
            }
            continue;
        }
        match token(ch) {
            Some(t) => {
                out.push_str(t.pattern);
                recognized += 1;
            }
            None => out.push_str(&regex::escape(&ch.to_string())),
        }
    }
    (recognized > 0).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        assert_eq!(to_strftime("Y-m-d H:i:s").unwrap(), "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(to_strftime("Y-m-d 100%").unwrap(), "%Y-%m-%d 100%%");
    }

    #[test]
    fn test_backslash_escapes_token_letter() {
        // "d" escaped is the literal letter, not the day token.
        assert_eq!(to_strftime(r"Y \d d").unwrap(), "%Y d %d");
    }

    #[test]
    fn test_tokenless_template_is_format_error() {
        let err = to_strftime("++__++").unwrap_err();
        assert!(matches!(err, TimeError::Format(_)));
    }

    #[test]
    fn test_search_pattern_shape() {
        let pattern = to_search_pattern("Y-m-d H:i:s").unwrap();
        assert_eq!(pattern, r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}");
        let re = regex::Regex::new(&pattern).unwrap();
        assert!(re.is_match("around 2006-01-02 15:04:05 or so"));
        assert!(!re.is_match("2006-01-02"));
    }

    #[test]
    fn test_search_pattern_tokenless_is_none() {
        assert!(to_search_pattern("++__++").is_none());
    }
}
