use super::opcode::{lookup, read_operands};

/// ## Instruction stream
///
/// Encoded instructions back to back. Append-only while the compiler
/// owns it; read-only once it is part of a `Bytecode`.
/// `Display` renders the disassembly.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instructions(Vec<u8>);

impl Instructions {
    pub fn new() -> Instructions {
        Instructions::default()
    }

    /// Append encoded bytes, returning the offset they start at.
    pub fn append(&mut self, ins: &[u8]) -> usize {
        let pos = self.0.len();
        self.0.extend_from_slice(ins);
        pos
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Instructions {
    fn from(v: Vec<u8>) -> Self {
        Instructions(v)
    }
}

impl std::fmt::Display for Instructions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut i = 0;
        while i < self.0.len() {
            let def = match lookup(self.0[i]) {
                Ok(def) => def,
                Err(error) => {
                    // Keep going one byte at a time so a corrupt
                    // stream stays inspectable.
                    writeln!(f, "{:04} ERROR: {}", i, error)?;
                    i += 1;
                    continue;
                }
            };
            match read_operands(def, &self.0[i + 1..]) {
                Ok((operands, read)) => {
                    write!(f, "{:04} {}", i, def.name)?;
                    for operand in operands {
                        write!(f, " {}", operand)?;
                    }
                    writeln!(f)?;
                    i += 1 + read;
                }
                Err(error) => {
                    writeln!(f, "{:04} ERROR: {}", i, error)?;
                    break;
                }
            }
        }
        Ok(())
    }
}
