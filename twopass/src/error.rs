use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: {directive} needs a decimal operand, found {operand:?}")]
    MalformedDirectiveOperand {
        line: usize,
        directive: &'static str,
        operand: String,
    },

    #[error("line {line}: location counter overflow")]
    AddressOverflow { line: usize },

    #[error("Start address not defined.")]
    UndefinedStartAddress,
}

pub type Result<T> = std::result::Result<T, AsmError>;

/// Something a pass recovered from. Reported alongside the output instead of
/// failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    MalformedStartAddress { line: usize, operand: String },
    InvalidLabel { line: usize, label: String },
    MalformedByteLiteral { line: usize, operand: String },
    UnknownOpcode { line: usize, opcode: String },
    UnresolvedOpcode { address: u32, opcode: String },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MalformedStartAddress { line, operand } => {
                write!(f, "line {}: ignoring START with non-hex operand {:?}", line, operand)
            }
            Diagnostic::InvalidLabel { line, label } => {
                write!(f, "line {}: {:?} is not a valid label", line, label)
            }
            Diagnostic::MalformedByteLiteral { line, operand } => {
                write!(f, "line {}: BYTE operand {:?} reserves nothing", line, operand)
            }
            Diagnostic::UnknownOpcode { line, opcode } => {
                write!(f, "line {}: unknown opcode {}", line, opcode)
            }
            Diagnostic::UnresolvedOpcode { address, opcode } => {
                write!(f, "{:04X}: no machine code for {}", address, opcode)
            }
        }
    }
}
