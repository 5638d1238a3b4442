use anyhow::{Context, Result};
use log::info;
use std::fs;

use twopass::{assemble_with, config::Config, listing::Listing};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    let opcodes = config.opcodes()?;
    info!("{} opcodes loaded", opcodes.len());

    let program_text = fs::read_to_string(&config.source)
        .with_context(|| format!("reading {}", config.source.display()))?;

    let assembly = assemble_with(&opcodes, &program_text)
        .with_context(|| format!("pass one over {}", config.source.display()))?;

    let symbols = assembly.symbol_report();
    let object = assembly.object_report();
    print!("{}\n{}", symbols, object);

    fs::write(format!("{}.lst", config.output_name), symbols)?;
    fs::write(format!("{}.obj", config.output_name), object)?;

    if config.write_listing {
        let listing = Listing::new(&assembly.pass_one).to_json()?;
        fs::write(format!("{}.sdb", config.output_name), listing)?;
    }

    if let Err(e) = &assembly.pass_two {
        return Err(anyhow::Error::msg(e.to_string()).context("pass two"));
    }

    Ok(())
}
