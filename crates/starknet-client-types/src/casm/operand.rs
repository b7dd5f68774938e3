//! Addressable operands referenced by CASM hints.

use std::fmt::Display;

use crate::felt::FieldElement;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Register {
    AP,
    FP,
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Register::AP => write!(f, "ap"),
            Register::FP => write!(f, "fp"),
        }
    }
}

/// An operand of the form [reg + offset].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRef {
    pub register: Register,
    pub offset: i32,
}

impl CellRef {
    pub fn new(register: Register, offset: i32) -> Self {
        Self { register, offset }
    }
}

impl Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} + {}]", self.register, self.offset)
    }
}

/// Returns an AP cell reference with the given offset.
pub fn ap_cell_ref(offset: i32) -> CellRef {
    CellRef::new(Register::AP, offset)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DerefOrImmediate {
    Deref(CellRef),
    Immediate(FieldElement),
}

impl Display for DerefOrImmediate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DerefOrImmediate::Deref(operand) => write!(f, "{operand}"),
            DerefOrImmediate::Immediate(operand) => write!(f, "{operand}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Mul,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "+"),
            Operation::Mul => write!(f, "*"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinOpOperand {
    pub op: Operation,
    pub a: CellRef,
    pub b: DerefOrImmediate,
}

impl Display for BinOpOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.a, self.op, self.b)
    }
}

/// The rhs operand grammar of a hint field: a memory dereference, a double
/// dereference with an extra offset, an immediate or a binary operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResOperand {
    Deref(CellRef),
    DoubleDeref(CellRef, i32),
    Immediate(FieldElement),
    BinOp(BinOpOperand),
}

impl Display for ResOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResOperand::Deref(operand) => write!(f, "{operand}"),
            ResOperand::DoubleDeref(operand, offset) => write!(f, "[{operand} + {offset}]"),
            ResOperand::Immediate(operand) => write!(f, "{operand}"),
            ResOperand::BinOp(operand) => write!(f, "{operand}"),
        }
    }
}

impl From<DerefOrImmediate> for ResOperand {
    fn from(x: DerefOrImmediate) -> Self {
        match x {
            DerefOrImmediate::Deref(deref) => ResOperand::Deref(deref),
            DerefOrImmediate::Immediate(immediate) => ResOperand::Immediate(immediate),
        }
    }
}

impl From<CellRef> for ResOperand {
    fn from(cell_ref: CellRef) -> Self {
        ResOperand::Deref(cell_ref)
    }
}
