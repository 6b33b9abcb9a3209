//! Deterministic basket generators: same seed, same baskets.

/// Catalog and transaction-count presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketSize {
    /// 100 carts over 20 items.
    Micro,
    /// 1K carts over 50 items.
    Small,
    /// 10K carts over 200 items.
    Medium,
}

impl BasketSize {
    pub fn transaction_count(&self) -> usize {
        match self {
            Self::Micro => 100,
            Self::Small => 1_000,
            Self::Medium => 10_000,
        }
    }

    pub fn catalog_size(&self) -> usize {
        match self {
            Self::Micro => 20,
            Self::Small => 50,
            Self::Medium => 200,
        }
    }

    /// Upper bound on distinct items per cart.
    pub fn max_cart_len(&self) -> usize {
        match self {
            Self::Micro => 5,
            Self::Small => 8,
            Self::Medium => 10,
        }
    }
}

/// Generate carts with a skewed item popularity, so low-numbered items are
/// frequent and co-occur often enough to produce multi-level runs.
pub fn generate_baskets(size: BasketSize, seed: u64) -> Vec<Vec<String>> {
    let mut rng = SimpleRng::new(seed);
    let catalog = size.catalog_size();
    (0..size.transaction_count())
        .map(|_| {
            let len = 1 + (rng.next_u64() as usize) % size.max_cart_len();
            (0..len)
                .map(|_| {
                    let u = rng.next_f64();
                    let idx = ((u * u) * catalog as f64) as usize;
                    format!("item_{:03}", idx.min(catalog - 1))
                })
                .collect()
        })
        .collect()
}

/// Xorshift64 PRNG. Not for anything but fixtures.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
