//! Semantic types of expressions.
//!
//! Every literal kind has a matching type. `Undefined` is what the checker
//! falls back to when it cannot give an expression a type, for instance a
//! reference to an unknown variable or an operation with mismatched operands.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Bool,
    Color,
    Percentage,
    Pixel,
    Scalar,
    Undefined,
}

impl ExpressionType {
    /// Whether values of this type take part in `+`, `-` and `*`.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ExpressionType::Percentage | ExpressionType::Pixel | ExpressionType::Scalar
        )
    }
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpressionType::Bool => "bool",
            ExpressionType::Color => "color",
            ExpressionType::Percentage => "percentage",
            ExpressionType::Pixel => "pixel",
            ExpressionType::Scalar => "scalar",
            ExpressionType::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}
