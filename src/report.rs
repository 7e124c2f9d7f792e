//! Result records printed by the CLI.

use crate::ffi;
use crate::operand::Operand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One squaring: the input and what `squared_` returned for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareReport {
    pub input: Operand,
    #[serde(with = "crate::operand::float_repr")]
    pub output: f64,
}

impl SquareReport {
    /// Square `operand` through the exported C-ABI routine.
    pub fn from_operand(operand: Operand) -> Self {
        let input = operand.value();
        Self {
            input: operand,
            output: ffi::squared_by_ref(&input),
        }
    }
}

impl fmt::Display for SquareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^2 = {}", self.input, self.output)
    }
}
