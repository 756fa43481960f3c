pub mod mixed;
pub mod point;

/// Sequence length shared by every workload.
pub const LEN: usize = 100_000;

/// Operations per iteration.
pub const OPS: usize = 10_000;

/// Deterministic xorshift generator so every implementation sees the same
/// operation stream.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }

    /// An ordered inclusive range inside `0..LEN`.
    pub fn span(&mut self) -> (usize, usize) {
        let (a, b) = (self.below(LEN), self.below(LEN));
        (a.min(b), a.max(b))
    }
}

/// Initial values in `1..=1000`.
pub fn initial() -> Vec<i64> {
    let mut rng = XorShift::new(0x5eed);
    (0..LEN).map(|_| 1 + (rng.next() % 1_000) as i64).collect()
}
