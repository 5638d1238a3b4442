use serde::Serialize;
pub use serde_json::Error;

use crate::{
    error::Diagnostic,
    labels::Labels,
    pass_one::{IntermediateRecord, PassOne},
};

/// Machine readable dump of pass one, written next to the object program.
#[derive(Serialize, Clone, Debug)]
pub struct Listing<'a> {
    pub name: &'a str,
    pub start: Option<u32>,
    pub end: u32,
    pub labels: &'a Labels,
    pub lines: &'a [IntermediateRecord],
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> Listing<'a> {
    pub fn new(pass: &'a PassOne) -> Self {
        Listing {
            name: &pass.program_name,
            start: pass.start_address,
            end: pass.end_address(),
            labels: &pass.labels,
            lines: &pass.records,
            diagnostics: &pass.diagnostics,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
