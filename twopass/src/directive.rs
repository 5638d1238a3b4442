use crate::{
    constants::WORD_SIZE,
    error::{AsmError, Result},
    optab::OpcodeTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteLiteral {
    /// `C'...'`, one byte per character.
    Chars(u32),
    /// `X'...'`, one byte per two hex digits.
    Hex(u32),
    /// Neither shape. Emitted but reserves nothing.
    Malformed,
}

impl ByteLiteral {
    pub fn parse(operand: &str) -> Self {
        let chars = operand.chars().count() as u32;
        if chars >= 3 && operand.starts_with("C'") && operand.ends_with('\'') {
            Self::Chars(chars - 3)
        } else if chars >= 3 && operand.starts_with("X'") && operand.ends_with('\'') {
            Self::Hex((chars - 2) / 2)
        } else {
            Self::Malformed
        }
    }

    pub fn len(&self) -> u32 {
        match self {
            Self::Chars(n) | Self::Hex(n) => *n,
            Self::Malformed => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Start,
    ResW,
    ResB,
    Byte(ByteLiteral),
    Word,
    End,
    Instruction,
    Unknown,
}

impl Directive {
    /// Decide once what an opcode column means. Assembler directives shadow
    /// opcode table entries with the same name.
    pub fn classify(opcode: &str, operand: &str, opcodes: &OpcodeTable) -> Self {
        match opcode {
            "START" => Self::Start,
            "RESW" => Self::ResW,
            "RESB" => Self::ResB,
            "BYTE" => Self::Byte(ByteLiteral::parse(operand)),
            "WORD" => Self::Word,
            "END" => Self::End,
            op if opcodes.contains(op) => Self::Instruction,
            _ => Self::Unknown,
        }
    }

    /// Whether the line shows up in the intermediate code.
    pub fn emits_record(&self) -> bool {
        !matches!(self, Self::Start | Self::End | Self::Unknown)
    }

    /// Bytes the line takes up. `line` is only used for error reporting.
    pub fn size(&self, operand: &str, line: usize) -> Result<u32> {
        Ok(match self {
            Self::Start | Self::End | Self::Unknown => 0,
            Self::ResW => reservation(operand, "RESW", line)?
                .checked_mul(WORD_SIZE)
                .ok_or(AsmError::AddressOverflow { line })?,
            Self::ResB => reservation(operand, "RESB", line)?,
            Self::Byte(literal) => literal.len(),
            Self::Word | Self::Instruction => WORD_SIZE,
        })
    }
}

fn reservation(operand: &str, directive: &'static str, line: usize) -> Result<u32> {
    operand
        .parse::<u32>()
        .map_err(|_| AsmError::MalformedDirectiveOperand {
            line,
            directive,
            operand: operand.to_owned(),
        })
}
