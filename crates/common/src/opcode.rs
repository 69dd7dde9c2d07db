//! Order codes of the META II machine.
//!
//! Seventeen executable codes plus the two pseudo-ops `ADR` and `END`,
//! which only steer the loader and never reach instruction memory.

/// Identifies an order code or pseudo-op by its mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Recognition
    /// Test for a literal string in the input.
    Tst,
    /// Recognize an identifier.
    Id,
    /// Recognize a number.
    Num,
    /// Recognize a quoted string.
    Sr,

    // Control transfer
    /// Call the subroutine at a label.
    Cll,
    /// Return from subroutine.
    R,
    /// Set the switch.
    Set,
    /// Unconditional branch.
    B,
    /// Branch if the switch is true.
    Bt,
    /// Branch if the switch is false.
    Bf,
    /// Halt with a parse failure if the switch is false.
    Be,

    // Output
    /// Copy a literal to the output buffer.
    Cl,
    /// Copy the token buffer to the output buffer.
    Ci,
    /// Output the frame's first generated label.
    Gn1,
    /// Output the frame's second generated label.
    Gn2,
    /// Move the output column to the label field.
    Lb,
    /// Flush the output buffer as one line.
    Out,

    // Pseudo-ops
    /// Name the starting label.
    Adr,
    /// End of the listing.
    End,
}

/// All opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 19] = [
    Opcode::Tst,
    Opcode::Id,
    Opcode::Num,
    Opcode::Sr,
    Opcode::Cll,
    Opcode::R,
    Opcode::Set,
    Opcode::B,
    Opcode::Bt,
    Opcode::Bf,
    Opcode::Be,
    Opcode::Cl,
    Opcode::Ci,
    Opcode::Gn1,
    Opcode::Gn2,
    Opcode::Lb,
    Opcode::Out,
    Opcode::Adr,
    Opcode::End,
];

impl Opcode {
    /// The mnemonic as written in a program listing.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Tst => "TST",
            Opcode::Id => "ID",
            Opcode::Num => "NUM",
            Opcode::Sr => "SR",
            Opcode::Cll => "CLL",
            Opcode::R => "R",
            Opcode::Set => "SET",
            Opcode::B => "B",
            Opcode::Bt => "BT",
            Opcode::Bf => "BF",
            Opcode::Be => "BE",
            Opcode::Cl => "CL",
            Opcode::Ci => "CI",
            Opcode::Gn1 => "GN1",
            Opcode::Gn2 => "GN2",
            Opcode::Lb => "LB",
            Opcode::Out => "OUT",
            Opcode::Adr => "ADR",
            Opcode::End => "END",
        }
    }

    /// Look up a mnemonic. Matching is exact and case-sensitive.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// Pseudo-ops are consumed by the loader and never executed.
    pub fn is_pseudo(self) -> bool {
        matches!(self, Opcode::Adr | Opcode::End)
    }

    /// Whether the opcode needs a non-empty argument in the listing.
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            Opcode::Tst
                | Opcode::Cll
                | Opcode::B
                | Opcode::Bt
                | Opcode::Bf
                | Opcode::Cl
                | Opcode::Adr
        )
    }

    /// Whether the argument is literal text, written between single quotes.
    pub fn quotes_argument(self) -> bool {
        matches!(self, Opcode::Tst | Opcode::Cl)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
