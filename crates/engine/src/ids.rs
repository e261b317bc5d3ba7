//! Id supply for participants and cards.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hands out sequential, zero-padded card ids (`0001`, `0002`, …).
///
/// The last issued value is meant to be persisted with the draw state so a
/// reloaded event keeps counting where it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardIdSequence {
    last: u32,
}

impl CardIdSequence {
    pub fn starting_after(last: u32) -> Self {
        Self { last }
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("{:04}", self.last)
    }

    /// Moves the sequence forward so it never reissues `value`.
    pub fn observe(&mut self, value: u32) {
        self.last = self.last.max(value);
    }
}

/// Builds an id of the form `PREFIX` + 4 clock chars + 4 random chars, all
/// base-36 and upper-cased.
pub fn generate_id<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let clock = to_base36(Utc::now().timestamp_millis().max(0) as u64);
    let clock_tail = &clock[clock.len().saturating_sub(4)..];
    let random: String = (0..4)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}{}", prefix, clock_tail, random).to_uppercase()
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
