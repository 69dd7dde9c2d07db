//! Loaded instructions: an order code with its argument.

use std::fmt;

use crate::label::listing_form;
use crate::opcode::Opcode;

/// One slot of instruction memory.
///
/// Opcodes that name a label or carry literal text hold it as payload,
/// so every handler receives exactly the data it needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    Tst(String),
    Id,
    Num,
    Sr,
    Cll(String),
    R,
    Set,
    B(String),
    Bt(String),
    Bf(String),
    Be,
    Cl(String),
    Ci,
    Gn1,
    Gn2,
    Lb,
    Out,
}

impl Instruction {
    /// Build an instruction from an opcode and its normalized argument.
    ///
    /// Returns `None` for the pseudo-ops, which have no instruction form.
    /// Opcodes without a payload ignore `argument`.
    pub fn from_parts(opcode: Opcode, argument: &str) -> Option<Self> {
        let arg = || argument.to_string();
        let instr = match opcode {
            Opcode::Tst => Instruction::Tst(arg()),
            Opcode::Id => Instruction::Id,
            Opcode::Num => Instruction::Num,
            Opcode::Sr => Instruction::Sr,
            Opcode::Cll => Instruction::Cll(arg()),
            Opcode::R => Instruction::R,
            Opcode::Set => Instruction::Set,
            Opcode::B => Instruction::B(arg()),
            Opcode::Bt => Instruction::Bt(arg()),
            Opcode::Bf => Instruction::Bf(arg()),
            Opcode::Be => Instruction::Be,
            Opcode::Cl => Instruction::Cl(arg()),
            Opcode::Ci => Instruction::Ci,
            Opcode::Gn1 => Instruction::Gn1,
            Opcode::Gn2 => Instruction::Gn2,
            Opcode::Lb => Instruction::Lb,
            Opcode::Out => Instruction::Out,
            Opcode::Adr | Opcode::End => return None,
        };
        Some(instr)
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Tst(_) => Opcode::Tst,
            Instruction::Id => Opcode::Id,
            Instruction::Num => Opcode::Num,
            Instruction::Sr => Opcode::Sr,
            Instruction::Cll(_) => Opcode::Cll,
            Instruction::R => Opcode::R,
            Instruction::Set => Opcode::Set,
            Instruction::B(_) => Opcode::B,
            Instruction::Bt(_) => Opcode::Bt,
            Instruction::Bf(_) => Opcode::Bf,
            Instruction::Be => Opcode::Be,
            Instruction::Cl(_) => Opcode::Cl,
            Instruction::Ci => Opcode::Ci,
            Instruction::Gn1 => Opcode::Gn1,
            Instruction::Gn2 => Opcode::Gn2,
            Instruction::Lb => Opcode::Lb,
            Instruction::Out => Opcode::Out,
        }
    }

    /// The label name or literal text, if this opcode carries one.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Instruction::Tst(s)
            | Instruction::Cll(s)
            | Instruction::B(s)
            | Instruction::Bt(s)
            | Instruction::Bf(s)
            | Instruction::Cl(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the instruction as a listing would spell it, e.g. `TST 'abc'`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opcode = self.opcode();
        match self.argument() {
            Some(arg) if opcode.quotes_argument() => write!(f, "{opcode} '{arg}'"),
            Some(arg) => write!(f, "{opcode} {}", listing_form(arg)),
            None => write!(f, "{opcode}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::ALL_OPCODES;

    #[test]
    fn from_parts_keeps_argument() {
        assert_eq!(
            Instruction::from_parts(Opcode::Tst, "abc"),
            Some(Instruction::Tst("abc".to_string()))
        );
        assert_eq!(
            Instruction::from_parts(Opcode::Cll, "EX1"),
            Some(Instruction::Cll("EX1".to_string()))
        );
    }

    #[test]
    fn from_parts_drops_argument_for_bare_opcodes() {
        assert_eq!(Instruction::from_parts(Opcode::Id, "junk"), Some(Instruction::Id));
    }

    #[test]
    fn pseudo_ops_have_no_instruction() {
        assert_eq!(Instruction::from_parts(Opcode::Adr, "START"), None);
        assert_eq!(Instruction::from_parts(Opcode::End, ""), None);
    }

    #[test]
    fn opcode_roundtrip_for_every_executable_opcode() {
        for op in ALL_OPCODES.iter().filter(|op| !op.is_pseudo()) {
            let instr = Instruction::from_parts(*op, "X").unwrap();
            assert_eq!(instr.opcode(), *op);
        }
    }

    #[test]
    fn display_forms() {
        assert_eq!(Instruction::Tst("a b".to_string()).to_string(), "TST 'a b'");
        assert_eq!(Instruction::Cl("ADR".to_string()).to_string(), "CL 'ADR'");
        assert_eq!(Instruction::Bf("L1".to_string()).to_string(), "BF L1");
        assert_eq!(Instruction::Cll("'X".to_string()).to_string(), "CLL ''X'");
        assert_eq!(Instruction::Gn1.to_string(), "GN1");
    }
}
