//! Commit identifier generation.
//!
//! Ids are short lowercase base-36 tokens. Uniqueness is best effort: a collision
//! only affects what the learner reads, since ids are never resolved by value.

use fake::rand;

/// Length of a generated commit id
pub const ID_LEN: usize = 8;

/// Source of fresh commit ids, injected so tests can be deterministic
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random ids for interactive sessions
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        to_base36(rand::random::<u64>())
    }
}

/// Predictable ids (`c0000001`, `c0000002`, ...) for tests and scripted runs
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("c{:0width$}", self.issued, width = ID_LEN - 1)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::with_capacity(ID_LEN);
    while out.len() < ID_LEN {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.into_iter().map(char::from).collect()
}
