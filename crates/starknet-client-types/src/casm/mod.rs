//! CASM-level types: hint grammar and the operands hints refer to.

pub mod hint;
pub mod operand;

pub use hint::{hint_from_value, hint_to_value, Hint};
pub use operand::{ap_cell_ref, BinOpOperand, CellRef, DerefOrImmediate, Operation, Register, ResOperand};
