//! Window title matching with POSIX basic regular expressions.
//!
//! Titles are matched case-sensitively against the whole string. The basic
//! syntax is rewritten into the `regex` crate dialect: `\(` `\)` group,
//! `\{m,n\}` repeats, and the characters `( ) { } | + ?` are plain text
//! unless escaped the basic way. `\|` is a literal bar, which is what the
//! Dolphin title example relies on.

use crate::errors::{ArrangeError, ArrangeResult};
use regex::Regex;

#[derive(Clone, Debug)]
pub struct TitlePattern {
    source: String,
    regex: Regex,
}

impl TitlePattern {
    pub fn new(pattern: &str) -> ArrangeResult<Self> {
        let invalid = |reason: String| ArrangeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };
        let body = translate_basic(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!(r"\A(?:{})\z", body)).map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// True when the whole title matches.
    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Rewrites a basic regular expression into `regex` syntax (unanchored).
pub fn translate_basic(pattern: &str) -> Result<String, String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut depth = 0usize;
    // Start of the whole expression or of a group: `*` is literal here.
    let mut at_start = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                let next = *chars
                    .get(i + 1)
                    .ok_or_else(|| "trailing backslash".to_string())?;
                i += 2;
                match next {
                    '(' => {
                        depth += 1;
                        out.push('(');
                        at_start = true;
                        continue;
                    }
                    ')' => {
                        if depth == 0 {
                            return Err("unmatched \\)".to_string());
                        }
                        depth -= 1;
                        out.push(')');
                    }
                    '{' => {
                        let close = find_interval_end(&chars, i)
                            .ok_or_else(|| "unmatched \\{".to_string())?;
                        let bounds: String = chars[i..close].iter().collect();
                        if bounds.is_empty() || !bounds.chars().all(|b| b.is_ascii_digit() || b == ',') {
                            return Err(format!("invalid interval \\{{{}\\}}", bounds));
                        }
                        out.push('{');
                        out.push_str(&bounds);
                        out.push('}');
                        i = close + 2;
                    }
                    '}' => return Err("unmatched \\}".to_string()),
                    '1'..='9' => return Err("back-references are not supported".to_string()),
                    other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
                }
            }
            '*' if at_start => {
                out.push_str(r"\*");
                i += 1;
            }
            '^' if at_start && (i == 0 || chars[i - 1] == '(') => {
                out.push('^');
                i += 1;
                // `^*` still has nothing to repeat
                continue;
            }
            '$' if is_expression_end(&chars, i + 1) => {
                out.push('$');
                i += 1;
            }
            '[' => {
                i = translate_bracket(&chars, i, &mut out)?;
            }
            '.' | '*' => {
                out.push(c);
                i += 1;
            }
            other => {
                out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4])));
                i += 1;
            }
        }
        at_start = false;
    }

    if depth != 0 {
        return Err("unmatched \\(".to_string());
    }
    Ok(out)
}

/// Index of the backslash closing an interval opened just before `from`.
fn find_interval_end(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1)).find(|&j| chars[j] == '\\' && chars[j + 1] == '}')
}

/// `$` anchors only at the end of the expression or right before `\)`.
fn is_expression_end(chars: &[char], next: usize) -> bool {
    next == chars.len() || (chars.get(next) == Some(&'\\') && chars.get(next + 1) == Some(&')'))
}

/// Copies a bracket expression starting at `start` (the `[`) into `out`,
/// returning the index just past its closing `]`.
fn translate_bracket(chars: &[char], start: usize, out: &mut String) -> Result<usize, String> {
    let mut i = start + 1;
    out.push('[');
    if chars.get(i) == Some(&'^') {
        out.push('^');
        i += 1;
    }
    // A `]` right after the opening is a member, not the end.
    let first = i;

    loop {
        let c = *chars
            .get(i)
            .ok_or_else(|| "unterminated bracket expression".to_string())?;
        match c {
            ']' if i != first => {
                out.push(']');
                return Ok(i + 1);
            }
            '[' if chars.get(i + 1) == Some(&':') => {
                let end = (i + 2..chars.len().saturating_sub(1))
                    .find(|&j| chars[j] == ':' && chars[j + 1] == ']')
                    .ok_or_else(|| "unterminated character class".to_string())?;
                let name: String = chars[i + 2..end].iter().collect();
                out.push_str(&format!("[:{}:]", name));
                i = end + 2;
            }
            '[' if matches!(chars.get(i + 1), Some(&'.') | Some(&'=')) => {
                return Err("collating elements are not supported".to_string());
            }
            '-' => {
                let is_edge = i == first || chars.get(i + 1) == Some(&']');
                out.push_str(if is_edge { r"\-" } else { "-" });
                i += 1;
            }
            '\\' | '[' | ']' | '&' | '~' | '^' => {
                out.push('\\');
                out.push(c);
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, title: &str) -> bool {
        TitlePattern::new(pattern).unwrap().is_match(title)
    }

    #[test]
    fn test_whole_title_must_match() {
        assert!(matches("yuzu Mainline.*", "yuzu Mainline 1734 | Zelda"));
        assert!(!matches("yuzu Mainline", "yuzu Mainline 1734"));
        assert!(!matches("Mainline.*", "yuzu Mainline 1734"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!matches("dolphin.*", "Dolphin 5.0"));
    }

    #[test]
    fn test_escaped_bar_is_literal() {
        let pattern = "Dolphin.* \\|.*";
        assert!(matches(pattern, "Dolphin 5.0-19870 | JIT64 DC | Direct3D 11"));
        assert!(!matches(pattern, "Dolphin 5.0-19870"));
    }

    #[test]
    fn test_extended_operators_are_plain_text() {
        assert!(matches("a+b?(c)|d{2}", "a+b?(c)|d{2}"));
        assert!(!matches("a+", "aa"));
    }

    #[test]
    fn test_basic_groups_and_intervals() {
        assert!(matches("\\(ab\\)*c", "ababc"));
        assert!(matches("x\\{2,3\\}", "xxx"));
        assert!(!matches("x\\{2,3\\}", "xxxx"));
    }

    #[test]
    fn test_leading_star_is_literal() {
        assert!(matches("*melon", "*melon"));
        assert!(matches("\\(*a\\)", "*a"));
    }

    #[test]
    fn test_anchors_only_at_edges() {
        assert!(matches("^melonDS$", "melonDS"));
        assert!(matches("a^b$c", "a^b$c"));
    }

    #[test]
    fn test_bracket_expressions() {
        assert!(matches("Window [[:digit:]]*", "Window 42"));
        assert!(matches("[]x]", "]"));
        assert!(matches("[^a-c]", "z"));
        assert!(!matches("[^a-c]", "b"));
        assert!(matches("[a\\]", "\\"));
        assert!(matches("[a-]", "-"));
    }

    #[test]
    fn test_back_references_are_rejected() {
        let err = TitlePattern::new("\\(a\\)\\1").unwrap_err();
        assert!(matches!(err, ArrangeError::InvalidPattern { .. }));
    }

    #[test]
    fn test_unbalanced_patterns_are_rejected() {
        assert!(TitlePattern::new("\\(abc").is_err());
        assert!(TitlePattern::new("abc\\)").is_err());
        assert!(TitlePattern::new("[abc").is_err());
        assert!(TitlePattern::new("abc\\").is_err());
    }

    #[test]
    fn test_translation_output() {
        assert_eq!(translate_basic("a.b*").unwrap(), "a.b*");
        assert_eq!(translate_basic("\\(x\\)+").unwrap(), "(x)\\+");
        assert_eq!(translate_basic("a\\|b").unwrap(), "a\\|b");
    }
}
