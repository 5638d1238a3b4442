pub use error::{AsmError, Diagnostic, Result};
pub use optab::OpcodeTable;
pub use pass_one::{pass_one, IntermediateRecord, PassOne};
pub use pass_two::{pass_two, PassTwo};
pub use record::{ObjectCode, ObjectProgram, Record, Text};

pub mod config;
pub mod error;
pub mod listing;
pub mod optab;
pub mod report;

mod constants;
mod directive;
mod labels;
mod line;
mod pass_one;
mod pass_two;
mod record;

pub use labels::Labels;

/// Output of both passes over one program.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub pass_one: PassOne,
    pub pass_two: Result<PassTwo>,
}

impl Assembly {
    pub fn symbol_report(&self) -> String {
        report::pass_one_report(&self.pass_one)
    }

    pub fn object_report(&self) -> String {
        report::pass_two_report(&self.pass_two)
    }
}

/// Assemble a program from its opcode definitions and source text.
///
/// # Errors
///
/// If pass one can't lay out the program. A missing start address is not an
/// error here; it shows up in `Assembly::pass_two`.
pub fn assemble(opcode_text: &str, program_text: &str) -> Result<Assembly> {
    let opcodes = OpcodeTable::load(opcode_text);
    assemble_with(&opcodes, program_text)
}

pub fn assemble_with(opcodes: &OpcodeTable, program_text: &str) -> Result<Assembly> {
    let first = pass_one(program_text, opcodes)?;
    let second = pass_two(&first, opcodes);

    Ok(Assembly {
        pass_one: first,
        pass_two: second,
    })
}
