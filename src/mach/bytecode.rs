use super::{Instructions, Val};
use crate::error;
use crate::lang::Error;
use crc::crc32;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const MAGIC: &[u8; 4] = b"MKBC";
const VERSION: u8 = 1;
const TAG_INTEGER: u8 = 0;
const TAG_BOOLEAN: u8 = 1;

/// ## Compiled program
///
/// The instruction stream and the constant pool it indexes into.
/// Produced once by the compiler and never modified afterwards.
///
/// The serialized form is:
/// ```text
/// "MKBC" version:u8 constant_count:u32 constants... code_len:u32 code... crc32:u32
/// ```
/// Integers are stored big-endian. Each constant is a tag byte
/// (0 = integer followed by 8 bytes, 1 = boolean followed by 1 byte).
/// The CRC-32 covers every byte before it.

#[derive(Debug, Clone, PartialEq)]
pub struct Bytecode {
    instructions: Instructions,
    constants: Rc<[Val]>,
}

impl Bytecode {
    pub fn new(instructions: Instructions, constants: Vec<Val>) -> Bytecode {
        Bytecode {
            instructions,
            constants: constants.into(),
        }
    }

    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    pub fn constants(&self) -> &[Val] {
        &self.constants
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::with_capacity(self.instructions.len() + 32);
        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        out.extend_from_slice(&length_u32(self.constants.len())?.to_be_bytes());
        for val in self.constants.iter() {
            match val {
                Val::Integer(n) => {
                    out.push(TAG_INTEGER);
                    out.extend_from_slice(&n.to_be_bytes());
                }
                Val::Boolean(b) => {
                    out.push(TAG_BOOLEAN);
                    out.push(*b as u8);
                }
            }
        }
        out.extend_from_slice(&length_u32(self.instructions.len())?.to_be_bytes());
        out.extend_from_slice(self.instructions.as_bytes());
        let checksum = crc32::checksum_ieee(&out);
        out.extend_from_slice(&checksum.to_be_bytes());
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Bytecode> {
        if bytes.len() < 4 {
            return Err(error!(MalformedBytecode; "TRUNCATED"));
        }
        let (body, checksum) = bytes.split_at(bytes.len() - 4);
        let expected = u32::from_be_bytes([checksum[0], checksum[1], checksum[2], checksum[3]]);
        if crc32::checksum_ieee(body) != expected {
            return Err(error!(MalformedBytecode; "CHECKSUM MISMATCH"));
        }
        let mut reader = Reader { bytes: body };
        if reader.take(4)? != MAGIC {
            return Err(error!(MalformedBytecode; "BAD MAGIC"));
        }
        let version = reader.u8()?;
        if version != VERSION {
            return Err(error!(MalformedBytecode; &format!("UNSUPPORTED VERSION {}", version)));
        }
        let count = reader.u32()? as usize;
        let mut constants = Vec::with_capacity(count.min(body.len()));
        for _ in 0..count {
            match reader.u8()? {
                TAG_INTEGER => {
                    let b = reader.take(8)?;
                    let mut n = [0u8; 8];
                    n.copy_from_slice(b);
                    constants.push(Val::Integer(i64::from_be_bytes(n)));
                }
                TAG_BOOLEAN => constants.push(Val::Boolean(reader.u8()? != 0)),
                tag => {
                    return Err(error!(MalformedBytecode; &format!("UNKNOWN CONSTANT TAG {}", tag)))
                }
            }
        }
        let len = reader.u32()? as usize;
        let instructions = Instructions::from(reader.take(len)?.to_vec());
        if !reader.bytes.is_empty() {
            return Err(error!(MalformedBytecode; "TRAILING BYTES"));
        }
        Ok(Bytecode::new(instructions, constants))
    }
}

fn length_u32(len: usize) -> Result<u32> {
    match u32::try_from(len) {
        Ok(len) => Ok(len),
        Err(_) => Err(error!(MalformedBytecode; "SECTION TOO LARGE")),
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.bytes.len() < len {
            return Err(error!(MalformedBytecode; "TRUNCATED"));
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
