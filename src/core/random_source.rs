use rand::SeedableRng;
use rand_pcg::Pcg64;

/// The single random source for a run, injected into every component that
/// consumes entropy (population generation and daily temperature noise).
///
/// Earlier revisions of this model constructed a freshly seeded engine
/// inside every call, which made runs unrepeatable. The default here is one
/// seeded generator threaded through the whole run so that a given seed
/// reproduces identical totals; `Legacy` keeps the fresh-engine-per-call
/// behaviour for backward comparison only.
#[derive(Debug)]
pub enum RandomSource {
    Seeded(Box<Pcg64>),
    Legacy,
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Box::new(Pcg64::seed_from_u64(seed)))
    }

    pub fn from_entropy() -> Self {
        Self::Seeded(Box::new(Pcg64::from_os_rng()))
    }

    pub fn legacy() -> Self {
        Self::Legacy
    }

    pub(crate) fn with<T>(&mut self, draw: impl FnOnce(&mut Pcg64) -> T) -> T {
        match self {
            Self::Seeded(rng) => draw(rng),
            Self::Legacy => draw(&mut Pcg64::from_os_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use rstest::*;

    #[rstest]
    fn seeded_source_reproduces_draws() {
        let mut first = RandomSource::seeded(42);
        let mut second = RandomSource::seeded(42);
        let draws_first: Vec<u32> = (0..10)
            .map(|_| first.with(|rng| rng.random_range(0..=100)))
            .collect();
        let draws_second: Vec<u32> = (0..10)
            .map(|_| second.with(|rng| rng.random_range(0..=100)))
            .collect();
        assert_eq!(draws_first, draws_second);
    }

    #[rstest]
    fn seeded_source_advances_between_draws() {
        let mut source = RandomSource::seeded(42);
        let draws: Vec<u64> = (0..100).map(|_| source.with(|rng| rng.random())).collect();
        let mut deduplicated = draws.clone();
        deduplicated.dedup();
        assert_eq!(draws, deduplicated, "consecutive draws repeated a value");
    }
}
