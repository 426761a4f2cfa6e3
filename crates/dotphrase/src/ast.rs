//! Abstract Syntax Tree types for calculation formulas.

use std::collections::HashMap;

// =============================================================================
// Operators
// =============================================================================

/// Binary arithmetic operators available to formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// Addition: `+`
    Add,
    /// Subtraction: `-`
    Subtract,
    /// Multiplication: `*`
    Multiply,
    /// Division: `/`
    Divide,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Subtract => write!(f, "-"),
            BinaryOp::Multiply => write!(f, "*"),
            BinaryOp::Divide => write!(f, "/"),
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

/// A node of a parsed formula expression.
///
/// The grammar is closed: every value a formula can compute is built from
/// these five node kinds, so evaluation never touches anything outside the
/// supplied inputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Numeric literal: `1.73`
    Number(f64),
    /// Reference to a named numeric input: `weight`
    Reference(String),
    /// Parenthesized subexpression: `(height * height)`
    Grouped(Box<Expr>),
    /// Unary negation: `-offset`
    Negate(Box<Expr>),
    /// Binary arithmetic: `weight / height`
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Builds a binary node without the caller boxing operands.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the distinct referenced input names in first-occurrence order.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expr::Number(_) => {}
            Expr::Reference(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Expr::Grouped(inner) | Expr::Negate(inner) => inner.collect_references(names),
            Expr::Binary { left, right, .. } => {
                left.collect_references(names);
                right.collect_references(names);
            }
        }
    }

    /// Evaluates the expression against named numeric inputs.
    ///
    /// Returns `None` when a referenced input is missing, on division by
    /// zero, or when the result is not finite. Never panics.
    pub fn evaluate(&self, inputs: &HashMap<String, f64>) -> Option<f64> {
        let value = match self {
            Expr::Number(n) => *n,
            Expr::Reference(name) => *inputs.get(name)?,
            Expr::Grouped(inner) => inner.evaluate(inputs)?,
            Expr::Negate(inner) => -inner.evaluate(inputs)?,
            Expr::Binary { op, left, right } => {
                let lhs = left.evaluate(inputs)?;
                let rhs = right.evaluate(inputs)?;
                match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Subtract => lhs - rhs,
                    BinaryOp::Multiply => lhs * rhs,
                    BinaryOp::Divide => {
                        if rhs == 0.0 {
                            return None;
                        }
                        lhs / rhs
                    }
                }
            }
        };
        value.is_finite().then_some(value)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Reference(name) => write!(f, "{}", name),
            Expr::Grouped(inner) => write!(f, "({})", inner),
            Expr::Negate(inner) => write!(f, "-{}", inner),
            Expr::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
        }
    }
}

// =============================================================================
// Formulas
// =============================================================================

/// A parsed calculation formula: `target = expression`.
///
/// The target names the output key the caller stores the result under; it is
/// informational only and never evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formula {
    /// The assignment target before `=`.
    pub target: String,
    /// The arithmetic expression after `=`.
    pub body: Expr,
}

impl Formula {
    /// Returns the distinct input names the formula depends on.
    pub fn references(&self) -> Vec<&str> {
        self.body.references()
    }

    /// Evaluates the formula body against named numeric inputs.
    ///
    /// See [`Expr::evaluate`] for the failure conditions.
    pub fn evaluate(&self, inputs: &HashMap<String, f64>) -> Option<f64> {
        self.body.evaluate(inputs)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.target, self.body)
    }
}

// ============================================================================
// Tests
// ============================================================================
