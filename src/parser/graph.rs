use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Number;

use super::dom::{sel, text_of};
use crate::model::{GraphData, GRAPH_LABELS};

static SCRIPT: LazyLock<Selector> = LazyLock::new(|| sel("script"));
static DATA_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data:\s*(\[[^\[\]]*\])").unwrap());

/// Find the radar-chart values in the page's inline scripts.
///
/// The first `data: [...]` literal that is a plain numeric array wins. Values
/// map positionally onto `GRAPH_LABELS`; extras are dropped, missing labels
/// are left out.
pub fn extract_graph_data(document: &Html) -> Option<GraphData> {
    for script in document.select(&SCRIPT) {
        let source = text_of(script);
        for caps in DATA_LITERAL_RE.captures_iter(&source) {
            if let Some(values) = parse_number_array(&caps[1]) {
                return Some(
                    GRAPH_LABELS
                        .iter()
                        .zip(values)
                        .map(|(label, v)| (label.to_string(), v))
                        .collect(),
                );
            }
        }
    }
    None
}

#[derive(Debug, PartialEq)]
enum Token {
    Open,
    Close,
    Comma,
    Number(Number),
}

fn tokenize(literal: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = literal.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '[' => tokens.push(Token::Open),
            ']' => tokens.push(Token::Close),
            ',' => tokens.push(Token::Comma),
            '-' | '+' | '.' | '0'..='9' => {
                let mut end = i + c.len_utf8();
                while let Some(&(j, n)) = chars.peek() {
                    let exp_sign = matches!(n, '-' | '+')
                        && matches!(literal[..j].chars().last(), Some('e' | 'E'));
                    if n.is_ascii_digit() || matches!(n, '.' | 'e' | 'E') || exp_sign {
                        end = j + n.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Number(to_number(&literal[i..end])?));
            }
            _ => return None,
        }
    }

    Some(tokens)
}

/// Keep integers as integers. Script-only spellings (`+1`, `.5`, `5.`) are
/// rewritten to JSON number syntax first.
fn to_number(raw: &str) -> Option<Number> {
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let (sign, digits) = match unsigned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", unsigned),
    };
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') || !digits.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let lead = if digits.starts_with('.') { "0" } else { "" };
    let json = format!("{}{}{}", sign, lead, digits.strip_suffix('.').unwrap_or(digits));
    match serde_json::from_str::<Number>(&json) {
        Ok(n) => Some(n),
        // leading zeros: not JSON, but still a number
        Err(_) => Number::from_f64(unsigned.parse::<f64>().ok()?),
    }
}

/// Strict parser for `[n, n, ...]`. Anything besides numbers, commas and the
/// enclosing brackets rejects the literal. A trailing comma is accepted.
fn parse_number_array(literal: &str) -> Option<Vec<Number>> {
    let tokens = tokenize(literal)?;
    let (Token::Open, Token::Close) = (tokens.first()?, tokens.last()?) else {
        return None;
    };

    let mut values = Vec::new();
    let mut expect_value = true;
    for token in &tokens[1..tokens.len() - 1] {
        match (token, expect_value) {
            (Token::Number(v), true) => {
                values.push(v.clone());
                expect_value = false;
            }
            (Token::Comma, false) => expect_value = true,
            _ => return None,
        }
    }
    Some(values)
}

// ── Tests ──
