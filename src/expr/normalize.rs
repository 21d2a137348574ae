//! Source clean-up applied before an expression reaches the parser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Number,
    Identifier,
    /// Spelled-out greek letter; always a complete name of its own.
    Glyph,
    Open,
    Close,
    Other,
}

/// Rewrites calculator-style input into something meval parses.
///
/// Trailing `;` are dropped, greek letters and typographic operators are spelled out
/// (`π` → `pi`, `θ` → `theta`, `×` → `*`), and implicit products get an explicit `*`
/// (`12pi` → `12*pi`, `(x+1)(x-1)` → `(x+1)*(x-1)`). A spelled-out glyph never merges
/// with a neighbouring name, so `πθ` → `pi*theta` and `sin(πx)` → `sin(pi*x)`. Scientific
/// notation is left intact.
#[must_use]
pub fn normalize_source(source: &str) -> String {
    let mut trimmed = source.trim();
    while let Some(rest) = trimmed.strip_suffix(';') {
        trimmed = rest.trim_end();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut normalized = String::with_capacity(trimmed.len() + 8);
    let mut previous: Option<TokenKind> = None;
    let mut index = 0;

    while index < chars.len() {
        let current = chars[index];
        if current.is_whitespace() {
            normalized.push(current);
            index += 1;
            continue;
        }

        let (kind, end, replacement) = if current.is_ascii_digit()
            || (current == '.' && chars.get(index + 1).is_some_and(char::is_ascii_digit))
        {
            (TokenKind::Number, scan_number(&chars, index), None)
        } else if current.is_ascii_alphabetic() || current == '_' {
            (TokenKind::Identifier, scan_identifier(&chars, index), None)
        } else if let Some(name) = glyph_identifier(current) {
            (TokenKind::Glyph, index + 1, Some(name))
        } else if let Some(operator) = glyph_operator(current) {
            (TokenKind::Other, index + 1, Some(operator))
        } else if current == '(' {
            (TokenKind::Open, index + 1, None)
        } else if current == ')' {
            (TokenKind::Close, index + 1, None)
        } else {
            (TokenKind::Other, index + 1, None)
        };

        if implies_product(previous, kind) {
            normalized.push('*');
        }
        match replacement {
            Some(text) => normalized.push_str(text),
            None => normalized.extend(&chars[index..end]),
        }

        previous = Some(kind);
        index = end;
    }

    normalized
}

fn implies_product(previous: Option<TokenKind>, next: TokenKind) -> bool {
    use TokenKind::{Close, Glyph, Identifier, Number, Open};

    matches!(
        (previous, next),
        (Some(Number), Identifier | Glyph | Open)
            | (Some(Close | Glyph), Identifier | Glyph | Number | Open)
            | (Some(Identifier), Glyph)
    )
}

fn scan_number(chars: &[char], start: usize) -> usize {
    let mut index = start;
    while index < chars.len() && (chars[index].is_ascii_digit() || chars[index] == '.') {
        index += 1;
    }

    // Exponent only when a digit follows, so `2e` stays `2*e`.
    if matches!(chars.get(index), Some('e' | 'E')) {
        let mut cursor = index + 1;
        if matches!(chars.get(cursor), Some('+' | '-')) {
            cursor += 1;
        }
        if chars.get(cursor).is_some_and(char::is_ascii_digit) {
            index = cursor;
            while index < chars.len() && chars[index].is_ascii_digit() {
                index += 1;
            }
        }
    }

    index
}

fn scan_identifier(chars: &[char], start: usize) -> usize {
    let mut index = start;
    while index < chars.len() && (chars[index].is_ascii_alphanumeric() || chars[index] == '_') {
        index += 1;
    }
    index
}

fn glyph_identifier(glyph: char) -> Option<&'static str> {
    match glyph {
        'π' => Some("pi"),
        'ϕ' | 'φ' => Some("phi"),
        'γ' => Some("gamma"),
        'θ' => Some("theta"),
        _ => None,
    }
}

fn glyph_operator(glyph: char) -> Option<&'static str> {
    match glyph {
        '×' | '·' => Some("*"),
        '÷' => Some("/"),
        '−' => Some("-"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_source;

    #[test]
    fn inserts_products_after_numbers() {
        assert_eq!(normalize_source("12pi"), "12*pi");
        assert_eq!(normalize_source("3x^2 + 2x"), "3*x^2 + 2*x");
        assert_eq!(normalize_source("2(x+1)"), "2*(x+1)");
    }

    #[test]
    fn inserts_products_after_closing_parens() {
        assert_eq!(normalize_source("(x+1)(x-1)"), "(x+1)*(x-1)");
        assert_eq!(normalize_source("(t)2"), "(t)*2");
        assert_eq!(normalize_source("(x)sin(x)"), "(x)*sin(x)");
    }

    #[test]
    fn keeps_function_calls_and_scientific_notation() {
        assert_eq!(normalize_source("sin(x)"), "sin(x)");
        assert_eq!(normalize_source("log10(x)"), "log10(x)");
        assert_eq!(normalize_source("1e5*x"), "1e5*x");
        assert_eq!(normalize_source("2.5E-3x"), "2.5E-3*x");
        assert_eq!(normalize_source("2e"), "2*e");
        assert_eq!(normalize_source(".5x"), ".5*x");
    }

    #[test]
    fn spells_out_greek_letters_and_operators() {
        assert_eq!(normalize_source("2π"), "2*pi");
        assert_eq!(normalize_source("sin(θ)"), "sin(theta)");
        assert_eq!(normalize_source("φ − γ"), "phi - gamma");
        assert_eq!(normalize_source("6 ÷ 2 × 3"), "6 / 2 * 3");
    }

    #[test]
    fn greek_letters_stay_separate_names() {
        assert_eq!(normalize_source("πθ"), "pi*theta");
        assert_eq!(normalize_source("sin(πx)"), "sin(pi*x)");
        assert_eq!(normalize_source("xπ"), "x*pi");
        assert_eq!(normalize_source("π(x+1)"), "pi*(x+1)");
        assert_eq!(normalize_source("(θ)π"), "(theta)*pi");
        assert_eq!(normalize_source("sin(θ)"), "sin(theta)");
    }

    #[test]
    fn trims_whitespace_and_trailing_semicolons() {
        assert_eq!(normalize_source("  x + 1 ;; "), "x + 1");
        assert_eq!(normalize_source("   "), "");
    }

    #[test]
    fn whitespace_between_factors_still_multiplies() {
        assert_eq!(normalize_source("2 x"), "2 *x");
    }
}
