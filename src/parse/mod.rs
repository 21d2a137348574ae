//! Recognises the form of an entered equation.

pub mod equation;

pub use equation::{EquationForm, FormKind, classify};
