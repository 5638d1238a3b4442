use std::fmt::Display;

use log::{debug, warn};
use serde::Serialize;

use crate::{
    constants::{is_valid_label, END_TAG},
    directive::{ByteLiteral, Directive},
    error::{AsmError, Diagnostic, Result},
    labels::Labels,
    line::SourceLine,
    optab::OpcodeTable,
};

/// One line of intermediate code. The sequence always finishes with a single
/// `End` marking the final location counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum IntermediateRecord {
    Line {
        address: u32,
        label: String,
        opcode: String,
        operand: String,
    },
    End {
        address: u32,
    },
}

impl IntermediateRecord {
    pub fn address(&self) -> u32 {
        match self {
            Self::Line { address, .. } | Self::End { address } => *address,
        }
    }
}

impl Display for IntermediateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line {
                address,
                label,
                opcode,
                operand,
            } => write!(f, "{:04X} {} {} {}", address, label, opcode, operand),
            Self::End { address } => write!(f, "{:04X} {}", address, END_TAG),
        }
    }
}

/// Everything pass two needs, handed over by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOne {
    pub labels: Labels,
    pub records: Vec<IntermediateRecord>,
    pub start_address: Option<u32>,
    pub program_name: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassOne {
    /// Location counter after the last line.
    pub fn end_address(&self) -> u32 {
        self.records
            .last()
            .map(IntermediateRecord::address)
            .unwrap_or_default()
    }
}

struct FirstPass<'a> {
    cur_offset: u32,
    opcodes: &'a OpcodeTable,
    labels: Labels,
    records: Vec<IntermediateRecord>,
    start_address: Option<u32>,
    program_name: String,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> FirstPass<'a> {
    fn new(opcodes: &'a OpcodeTable) -> Self {
        Self {
            cur_offset: 0,
            opcodes,
            labels: Labels::new(),
            records: Vec::new(),
            start_address: None,
            program_name: String::new(),
            diagnostics: Vec::new(),
        }
    }

    fn parse_lines(mut self, lines: &[&str]) -> Result<PassOne> {
        for (line_no, line) in lines.iter().enumerate() {
            if let Some(tokens) = SourceLine::parse(line) {
                self.parse_line(&tokens, line_no + 1)?;
            }
        }

        self.records.push(IntermediateRecord::End {
            address: self.cur_offset,
        });

        Ok(PassOne {
            labels: self.labels,
            records: self.records,
            start_address: self.start_address,
            program_name: self.program_name,
            diagnostics: self.diagnostics,
        })
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn start(&mut self, tokens: &SourceLine, line_no: usize) {
        match u32::from_str_radix(tokens.operand, 16) {
            Ok(start) => {
                debug!("program {:?} starts at {:04X}", tokens.label, start);
                self.start_address = Some(start);
                self.cur_offset = start;
                self.program_name = tokens.label.to_owned();
            }
            Err(_) => self.diagnose(Diagnostic::MalformedStartAddress {
                line: line_no,
                operand: tokens.operand.to_owned(),
            }),
        }
    }

    fn parse_line(&mut self, tokens: &SourceLine, line_no: usize) -> Result<()> {
        let directive = Directive::classify(tokens.opcode, tokens.operand, self.opcodes);

        if directive == Directive::Start {
            self.start(tokens, line_no);
            return Ok(());
        }

        let offset = self.cur_offset;

        if is_valid_label(tokens.label) {
            debug!("{} = {:04X}", tokens.label, offset);
            self.labels.add(tokens.label.to_owned(), offset);
        } else if !tokens.label.is_empty() {
            self.diagnose(Diagnostic::InvalidLabel {
                line: line_no,
                label: tokens.label.to_owned(),
            });
        }

        match directive {
            Directive::Unknown if !tokens.opcode.is_empty() => {
                self.diagnose(Diagnostic::UnknownOpcode {
                    line: line_no,
                    opcode: tokens.opcode.to_owned(),
                });
            }
            Directive::Byte(ByteLiteral::Malformed) => {
                self.diagnose(Diagnostic::MalformedByteLiteral {
                    line: line_no,
                    operand: tokens.operand.to_owned(),
                });
            }
            _ => {}
        }

        if !directive.emits_record() {
            return Ok(());
        }

        let size = directive.size(tokens.operand, line_no)?;

        self.records.push(IntermediateRecord::Line {
            address: offset,
            label: tokens.label.to_owned(),
            opcode: tokens.opcode.to_owned(),
            operand: tokens.operand.to_owned(),
        });

        self.cur_offset = offset
            .checked_add(size)
            .ok_or(AsmError::AddressOverflow { line: line_no })?;

        Ok(())
    }
}

/// Build the symbol table and intermediate code for `source`.
///
/// # Errors
///
/// If a `RESW`/`RESB` operand isn't a decimal number, or the location
/// counter runs past `u32::MAX`.
pub fn pass_one(source: &str, opcodes: &OpcodeTable) -> Result<PassOne> {
    let lines = source.lines().collect::<Vec<_>>();
    FirstPass::new(opcodes).parse_lines(&lines)
}
