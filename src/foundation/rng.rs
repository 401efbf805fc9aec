/// Small deterministic generator used for per-step jitter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `[-bound, bound]`.
    pub(crate) fn next_symmetric(&mut self, bound: u32) -> i64 {
        if bound == 0 {
            return 0;
        }
        let span = 2 * u64::from(bound) + 1;
        (self.next_u64() % span) as i64 - i64::from(bound)
    }
}
