use std::fmt::Display;

use crate::constants::WORD_SIZE;

/// Machine code followed by its resolved 4 hex digit operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectCode {
    pub machine_code: String,
    pub operand: String,
}

impl Display for ObjectCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.machine_code, self.operand)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub address: u32,
    pub instructions: Vec<ObjectCode>,
}

impl Text {
    pub fn new(address: u32) -> Self {
        Self {
            address,
            instructions: Vec::new(),
        }
    }

    /// Every entry counts as one word.
    pub fn len(&self) -> usize {
        self.instructions.len() * WORD_SIZE as usize
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header { name: String, start: u32 },
    Text(Text),
    End { start: u32 },
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Header { name, start } => write!(f, "H ^ {} ^ {:06X}", name, start),
            Record::Text(text) => {
                write!(f, "T ^ {:06X} ^ {:02X} ^ ", text.address, text.len())?;
                for (i, instruction) in text.instructions.iter().enumerate() {
                    if i > 0 {
                        write!(f, "^")?;
                    }
                    write!(f, "{}", instruction)?;
                }

                Ok(())
            }
            Record::End { start } => write!(f, "E ^ {:06X}", start),
        }
    }
}

/// Header, at most one text record, and an end record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectProgram {
    pub records: Vec<Record>,
}

impl ObjectProgram {
    pub fn text(&self) -> Option<&Text> {
        self.records.iter().find_map(|record| match record {
            Record::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl Display for ObjectProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in self.records.iter() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
