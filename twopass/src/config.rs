use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::optab::OpcodeTable;

pub static OPTAB_VAR: &str = "TWOPASS_OPTAB";
pub static LISTING_VAR: &str = "TWOPASS_LISTING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub output_name: String,
    /// Opcode definitions to load instead of the SIC table.
    pub optab: Option<PathBuf>,
    pub write_listing: bool,
}

impl Config {
    /// Read args and environment, picking up a `.env` file if there is one.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::new(
            env::args().skip(1),
            env::var(OPTAB_VAR).ok(),
            env::var(LISTING_VAR).ok(),
        )
    }

    pub fn new(
        mut args: impl Iterator<Item = String>,
        optab: Option<String>,
        listing: Option<String>,
    ) -> Result<Self> {
        let source = args
            .next()
            .ok_or_else(|| anyhow::Error::msg("Need an input filename"))?;
        let output_name = args
            .next()
            .ok_or_else(|| anyhow::Error::msg("Need an output filename"))?;

        let write_listing = match listing.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(flag) => !matches!(
                flag.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
        };

        Ok(Self {
            source: source.into(),
            output_name,
            optab: optab.filter(|path| !path.is_empty()).map(PathBuf::from),
            write_listing,
        })
    }

    pub fn opcodes(&self) -> Result<OpcodeTable> {
        match &self.optab {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading opcode table {}", path.display()))?;
                Ok(OpcodeTable::load(&text))
            }
            None => Ok(OpcodeTable::sic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn positional_args() -> Result<()> {
        let config = Config::new(args(&["prog.asm", "out"]), None, None)?;

        assert_eq!(config.source, PathBuf::from("prog.asm"));
        assert_eq!(config.output_name, "out");
        assert_eq!(config.optab, None);
        assert!(config.write_listing);
        assert_eq!(config.opcodes()?, OpcodeTable::sic());
        Ok(())
    }

    #[test]
    fn missing_args() {
        assert!(Config::new(args(&[]), None, None).is_err());
        assert!(Config::new(args(&["prog.asm"]), None, None).is_err());
    }

    #[test]
    fn environment() -> Result<()> {
        let config = Config::new(
            args(&["prog.asm", "out"]),
            Some("ops.txt".to_owned()),
            Some("False".to_owned()),
        )?;

        assert_eq!(config.optab, Some(PathBuf::from("ops.txt")));
        assert!(!config.write_listing);

        let config = Config::new(args(&["a", "b"]), Some(String::new()), Some("1".to_owned()))?;
        assert_eq!(config.optab, None);
        assert!(config.write_listing);
        Ok(())
    }

    #[test]
    fn missing_opcode_file() {
        let config = Config::new(
            args(&["a", "b"]),
            Some("/definitely/not/here.txt".to_owned()),
            None,
        )
        .unwrap();

        assert!(config.opcodes().is_err());
    }
}
