use crate::{
    foundation::error::{ArxError, ArxResult},
    foundation::math::{low_mask, rotl_word},
    mix::codec::MixDescriptor,
};

impl MixDescriptor {
    /// Run the mix over `state` for `rounds` rounds, in place.
    ///
    /// `state` holds one word per term (`a, b, c, d` in order). Words are
    /// truncated to the type's word width first. Operation `i` writes term
    /// `i % terms` from term `(i + terms - 1) % terms`, so the chain always
    /// reads the most recently written word.
    pub fn apply(&self, state: &mut [u64], rounds: u32) -> ArxResult<()> {
        let info = self.mix_type().info();
        let terms = info.term_count;
        if state.len() != terms {
            return Err(ArxError::validation(format!(
                "mix type {} works on {} words, got {}",
                info.id,
                terms,
                state.len()
            )));
        }

        let word_bits = info.word_bits;
        let mask = low_mask(word_bits);
        for word in state.iter_mut() {
            *word &= mask;
        }

        for _ in 0..rounds {
            let mut receiver = 0usize;
            let mut argument = terms - 1;
            for op in self.operations() {
                let rotated = rotl_word(state[argument], op.rotation_amount, word_bits);
                state[receiver] = if op.is_xor {
                    state[receiver] ^ rotated
                } else {
                    state[receiver].wrapping_add(rotated) & mask
                };
                receiver = (receiver + 1) % terms;
                argument = (argument + 1) % terms;
            }
        }
        Ok(())
    }

    /// Convenience wrapper around [`MixDescriptor::apply`] returning the mixed words.
    pub fn mix_words(&self, words: &[u64], rounds: u32) -> ArxResult<Vec<u64>> {
        let mut state = words.to_vec();
        self.apply(&mut state, rounds)?;
        Ok(state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mix/eval.rs"]
mod tests;
