use std::fmt;

use crate::mix::codec::{MixDescriptor, Operation};

const VARIABLE_NAMES: [char; 4] = ['a', 'b', 'c', 'd'];

/// Single-line listing such as `"XOR 3 ADD 5 XOR 0 ADD 7"`.
pub fn terse_description(desc: &MixDescriptor) -> String {
    desc.operations()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// C-like pseudocode, one line per operation.
///
/// The receiver starts at `a` and the argument at the last term; both advance
/// by one (wrapping) after every line.
pub fn code_description(desc: &MixDescriptor) -> String {
    let terms = desc.mix_type().term_count();
    let mut out = String::new();
    let mut receiver = 0usize;
    let mut argument = terms - 1;
    for op in desc.operations() {
        let assign = if op.is_xor { "^=" } else { "+=" };
        out.push_str(&format!(
            "{} {assign} ROTL({},{});\n",
            VARIABLE_NAMES[receiver], VARIABLE_NAMES[argument], op.rotation_amount
        ));
        receiver = (receiver + 1) % terms;
        argument = (argument + 1) % terms;
    }
    out
}

impl MixDescriptor {
    /// See [`terse_description`].
    pub fn terse(&self) -> String {
        terse_description(self)
    }

    /// See [`code_description`].
    pub fn code(&self) -> String {
        code_description(self)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic(), self.rotation_amount)
    }
}

impl fmt::Display for MixDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&terse_description(self))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/describe/render.rs"]
mod tests;
