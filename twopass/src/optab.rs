use indexmap::IndexMap;
use log::debug;

/// Mnemonic to machine-code mapping consulted by both passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeTable {
    opcodes: IndexMap<String, String>,
}

impl OpcodeTable {
    pub fn new() -> Self {
        Self {
            opcodes: IndexMap::new(),
        }
    }

    /// Parse `mnemonic machine_code` lines. Lines that don't have exactly two
    /// fields are dropped, and a repeated mnemonic keeps its last definition.
    /// Leading blanks count as an empty first field.
    pub fn load(text: &str) -> Self {
        let mut table = Self::new();
        for line in text.lines() {
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if line.starts_with(char::is_whitespace) && !fields.is_empty() {
                debug!("dropping indented opcode definition {:?}", line);
            } else if let [mnemonic, machine_code] = fields[..] {
                table.add(mnemonic, machine_code);
            } else if !fields.is_empty() {
                debug!("dropping opcode definition {:?}", line);
            }
        }
        table
    }

    /// The standard SIC instruction set.
    pub fn sic() -> Self {
        let mut table = Self::new();
        for (mnemonic, code) in [
            ("ADD", 0x18),
            ("AND", 0x40),
            ("COMP", 0x28),
            ("DIV", 0x24),
            ("J", 0x3C),
            ("JEQ", 0x30),
            ("JGT", 0x34),
            ("JLT", 0x38),
            ("JSUB", 0x48),
            ("LDA", 0x00),
            ("LDCH", 0x50),
            ("LDL", 0x08),
            ("LDX", 0x04),
            ("MUL", 0x20),
            ("OR", 0x44),
            ("RD", 0xD8),
            ("RSUB", 0x4C),
            ("STA", 0x0C),
            ("STCH", 0x54),
            ("STL", 0x14),
            ("STSW", 0xE8),
            ("STX", 0x10),
            ("SUB", 0x1C),
            ("TD", 0xE0),
            ("TIX", 0x2C),
            ("WD", 0xDC),
        ] {
            table.add(mnemonic, &format!("{:02X}", code));
        }
        table
    }

    pub fn add(&mut self, mnemonic: &str, machine_code: &str) {
        self.opcodes
            .insert(mnemonic.to_owned(), machine_code.to_owned());
    }

    pub fn get(&self, mnemonic: &str) -> Option<&str> {
        self.opcodes.get(mnemonic).map(String::as_str)
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.opcodes.contains_key(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.opcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty()
    }
}
