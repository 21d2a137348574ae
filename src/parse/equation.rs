//! Classifies raw user input into one of the plottable equation forms.

use serde::Serialize;

/// A classified equation with its extracted sub-expressions (trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationForm {
    /// `y = f(x)`, or a bare expression in `x`.
    Explicit { rhs: String },
    /// `f(x, y) = g(x, y)`.
    Implicit { lhs: String, rhs: String },
    /// `(x(t), y(t))`.
    Parametric { x_expr: String, y_expr: String },
    /// `r = f(theta)`.
    Polar { r_expr: String },
    Unrecognized,
}

/// Field-less tag of an [`EquationForm`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Explicit,
    Implicit,
    Parametric,
    Polar,
    #[default]
    Unrecognized,
}

impl EquationForm {
    #[must_use]
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Explicit { .. } => FormKind::Explicit,
            Self::Implicit { .. } => FormKind::Implicit,
            Self::Parametric { .. } => FormKind::Parametric,
            Self::Polar { .. } => FormKind::Polar,
            Self::Unrecognized => FormKind::Unrecognized,
        }
    }
}

impl FormKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Implicit => "implicit",
            Self::Parametric => "parametric",
            Self::Polar => "polar",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the equation form of `expression`.
///
/// First match wins: a `( … , … )` tuple is parametric, `r = …` is polar, text containing `x`
/// but no `y` (or `y = …` without `y` on the right) is explicit, anything else containing `x`
/// or `y` is implicit. For equations the explicit rhs is the part after `=`; a bare expression
/// containing `y` is read as `y = <expression>`.
///
/// Detection looks at letters, not identifiers, so `exp(1)` counts as mentioning `x` and plots
/// as a constant line.
#[must_use]
pub fn classify(expression: &str) -> EquationForm {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return EquationForm::Unrecognized;
    }

    if let Some((x_expr, y_expr)) = split_tuple(trimmed) {
        return EquationForm::Parametric {
            x_expr: x_expr.to_owned(),
            y_expr: y_expr.to_owned(),
        };
    }

    let has_x = mentions_variable(trimmed, 'x');
    let has_y = mentions_variable(trimmed, 'y');

    if let Some((lhs, rhs)) = trimmed.split_once('=') {
        let (lhs, rhs) = (lhs.trim(), rhs.trim());
        if lhs.is_empty() || rhs.is_empty() {
            return EquationForm::Unrecognized;
        }
        if lhs == "r" {
            return EquationForm::Polar {
                r_expr: rhs.to_owned(),
            };
        }
        if (lhs == "y" && !mentions_variable(rhs, 'y')) || (has_x && !has_y) {
            return EquationForm::Explicit {
                rhs: rhs.to_owned(),
            };
        }
        if has_x || has_y {
            return EquationForm::Implicit {
                lhs: lhs.to_owned(),
                rhs: rhs.to_owned(),
            };
        }
        return EquationForm::Unrecognized;
    }

    if has_x && !has_y {
        EquationForm::Explicit {
            rhs: trimmed.to_owned(),
        }
    } else if has_y {
        EquationForm::Implicit {
            lhs: "y".to_owned(),
            rhs: trimmed.to_owned(),
        }
    } else {
        EquationForm::Unrecognized
    }
}

/// Splits `(a, b)` at its only top-level comma. The outer parens must enclose everything.
fn split_tuple(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0usize;
    let mut comma = None;

    for (index, current) in inner.char_indices() {
        match current {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                // Closing the outer paren early: `(a), (b)` is not a tuple.
                depth = depth.checked_sub(1)?;
            }
            ',' if depth == 0 => {
                if comma.replace(index).is_some() {
                    return None;
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }

    let index = comma?;
    let (first, second) = (inner[..index].trim(), inner[index + 1..].trim());
    if first.is_empty() || second.is_empty() {
        None
    } else {
        Some((first, second))
    }
}

fn mentions_variable(text: &str, name: char) -> bool {
    text.contains(name)
}
