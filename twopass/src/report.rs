//! Plain text reports for each pass, in the layout shown to the user.

use crate::{error::AsmError, pass_one::PassOne, pass_two::PassTwo};

pub fn pass_one_report(pass: &PassOne) -> String {
    let symbols = pass
        .labels
        .iter()
        .map(|(label, address)| format!("{}: {:04X}\n", label, address))
        .collect::<String>();
    let code = pass
        .records
        .iter()
        .map(|record| format!("{}\n", record))
        .collect::<String>();

    format!(
        "Symbol Table:\n{}\n\nIntermediate Code:\n{}",
        symbols, code
    )
}

/// The object program, or the error line when there isn't one. Errors are
/// not prefixed with the `Object Program:` heading.
pub fn pass_two_report(pass: &Result<PassTwo, AsmError>) -> String {
    match pass {
        Ok(pass) => format!("Object Program:\n{}", pass.program),
        Err(e) => error_report(e),
    }
}

pub fn error_report(error: &AsmError) -> String {
    format!("Error: {}", error)
}
