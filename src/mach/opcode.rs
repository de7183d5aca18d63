use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine instruction set
///
/// The virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// An instruction is one opcode byte followed by its operands, each stored
/// big-endian at the width its [`Definition`] declares. There is no length
/// prefix, so the definition table is the only way to find where the next
/// instruction begins.
///
/// For example: `1 + 2` compiles to `[CONSTANT 0, CONSTANT 1, ADD]`
/// with the constant pool `[1, 2]`.

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Push a constant pool entry. One 2-byte operand, the pool index.
    Constant = 0,
    /// Pop right, pop left, push left + right.
    Add = 1,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Definition {
    pub name: &'static str,
    pub operand_widths: &'static [usize],
}

static CONSTANT: Definition = Definition {
    name: "CONSTANT",
    operand_widths: &[2],
};

static ADD: Definition = Definition {
    name: "ADD",
    operand_widths: &[],
};

impl Opcode {
    pub fn definition(self) -> &'static Definition {
        match self {
            Opcode::Constant => &CONSTANT,
            Opcode::Add => &ADD,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;
    fn try_from(op: u8) -> Result<Self> {
        match op {
            0 => Ok(Opcode::Constant),
            1 => Ok(Opcode::Add),
            _ => Err(error!(UndefinedOpcode; &format!("OPCODE {}", op))),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.definition().name)
    }
}

/// Resolve a raw byte to its definition.
pub fn lookup(op: u8) -> Result<&'static Definition> {
    Ok(Opcode::try_from(op)?.definition())
}

/// Encode one instruction.
pub fn make(op: Opcode, operands: &[usize]) -> Result<Vec<u8>> {
    let def = op.definition();
    if operands.len() != def.operand_widths.len() {
        return Err(error!(BadOperand; &format!(
            "{} TAKES {} OPERANDS, GOT {}",
            def.name,
            def.operand_widths.len(),
            operands.len()
        )));
    }
    let len = 1 + def.operand_widths.iter().sum::<usize>();
    let mut instruction = Vec::with_capacity(len);
    instruction.push(op as u8);
    for (&operand, &width) in operands.iter().zip(def.operand_widths) {
        let operand = operand as u64;
        if width == 0 || width > 8 || (width < 8 && operand >> (8 * width) != 0) {
            return Err(error!(BadOperand; &format!(
                "{} DOES NOT FIT {} BYTES FOR {}",
                operand, width, def.name
            )));
        }
        instruction.extend_from_slice(&operand.to_be_bytes()[8 - width..]);
    }
    debug_assert_eq!(instruction.len(), len);
    Ok(instruction)
}

/// Decode the operands following an opcode byte.
/// Returns the operand values and the number of bytes they occupied.
pub fn read_operands(def: &Definition, ins: &[u8]) -> Result<(Vec<usize>, usize)> {
    let mut operands = Vec::with_capacity(def.operand_widths.len());
    let mut offset = 0;
    for &width in def.operand_widths {
        let bytes = match ins.get(offset..offset + width) {
            Some(bytes) => bytes,
            None => {
                return Err(error!(MalformedBytecode; &format!("{} OPERAND TRUNCATED", def.name)))
            }
        };
        operands.push(bytes.iter().fold(0, |acc, &b| (acc << 8) | b as usize));
        offset += width;
    }
    Ok((operands, offset))
}

pub fn read_u16(ins: &[u8]) -> Result<u16> {
    match ins {
        [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => Err(error!(MalformedBytecode; "U16 OPERAND TRUNCATED")),
    }
}
