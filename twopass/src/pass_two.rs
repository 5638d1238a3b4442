use log::{debug, warn};

use crate::{
    constants::DEFAULT_OPERAND,
    error::{AsmError, Diagnostic, Result},
    labels::Labels,
    optab::OpcodeTable,
    pass_one::{IntermediateRecord, PassOne},
    record::{ObjectCode, ObjectProgram, Record, Text},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassTwo {
    pub program: ObjectProgram,
    pub diagnostics: Vec<Diagnostic>,
}

struct SecondPass<'a> {
    pass_one: &'a PassOne,
    opcodes: &'a OpcodeTable,
    start_addr: u32,
    text: Text,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> SecondPass<'a> {
    fn new(pass_one: &'a PassOne, opcodes: &'a OpcodeTable) -> Result<Self> {
        let start_addr = pass_one
            .start_address
            .ok_or(AsmError::UndefinedStartAddress)?;

        Ok(Self {
            pass_one,
            opcodes,
            start_addr,
            text: Text::new(start_addr),
            diagnostics: Vec::new(),
        })
    }

    fn assemble_lines(mut self) -> PassTwo {
        for record in self.pass_one.records.iter() {
            if let IntermediateRecord::Line {
                address,
                opcode,
                operand,
                ..
            } = record
            {
                self.assemble_line(*address, opcode, operand);
            }
        }

        let mut records = vec![Record::Header {
            name: self.pass_one.program_name.clone(),
            start: self.start_addr,
        }];
        if !self.text.is_empty() {
            records.push(Record::Text(self.text));
        }
        records.push(Record::End {
            start: self.start_addr,
        });

        PassTwo {
            program: ObjectProgram { records },
            diagnostics: self.diagnostics,
        }
    }

    fn assemble_line(&mut self, address: u32, opcode: &str, operand: &str) {
        let Some(machine_code) = self.opcodes.get(opcode) else {
            let diagnostic = Diagnostic::UnresolvedOpcode {
                address,
                opcode: opcode.to_owned(),
            };
            // Directives land here too, so this is expected noise.
            debug!("{}", diagnostic);
            self.diagnostics.push(diagnostic);
            return;
        };

        let code = ObjectCode {
            machine_code: machine_code.to_owned(),
            operand: resolve_operand(operand, &self.pass_one.labels),
        };
        debug!("{:04X}: {}", address, code);
        self.text.instructions.push(code);
    }
}

/// A label's address, else a decimal value, else `0000`.
pub fn resolve_operand(operand: &str, labels: &Labels) -> String {
    if let Some(address) = labels.get(operand) {
        return format!("{:04X}", address);
    }

    if !operand.is_empty() && operand.chars().all(|c| c.is_ascii_digit()) {
        match operand.parse::<u32>() {
            Ok(value) => return format!("{:04X}", value),
            Err(_) => warn!("operand {} doesn't fit in a word", operand),
        }
    }

    DEFAULT_OPERAND.to_owned()
}

/// Generate the object program from the output of pass one.
///
/// # Errors
///
/// If pass one never saw a valid `START`.
pub fn pass_two(pass_one: &PassOne, opcodes: &OpcodeTable) -> Result<PassTwo> {
    let pass = SecondPass::new(pass_one, opcodes)?;
    Ok(pass.assemble_lines())
}
