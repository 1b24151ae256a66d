use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::RngCore;

use super::create_rng;

/// Replays fixed `u64` words, then continues from a seeded generator.
///
/// A zero word maps every range draw to its lower bound, so a run of zeros
/// makes consecutive draws coincide. `next_u32` takes the high half of the
/// scripted word.
pub(crate) struct ScriptedRng {
    script: VecDeque<u64>,
    fallback: SmallRng,
    calls: usize,
}

impl ScriptedRng {
    pub(crate) fn new(script: impl IntoIterator<Item = u64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: create_rng(0x5eed),
            calls: 0,
        }
    }

    pub(crate) fn zeros(n: usize) -> Self {
        Self::new(vec![0; n])
    }

    /// Words pulled so far, scripted or not.
    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    /// Scripted words not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.calls += 1;
        match self.script.pop_front() {
            Some(word) => u32::try_from(word >> 32).unwrap_or(u32::MAX),
            None => self.fallback.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.calls += 1;
        match self.script.pop_front() {
            Some(word) => word,
            None => self.fallback.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.fallback.fill_bytes(dst);
    }
}
