// Storage bin assignment for the manifest rows.

use rand::Rng;

/// Hands out the storage bin label of each manifest row.
///
/// The counter starts at bin 1 and advances after each row with probability
/// one half, drawn from the source given at construction. Seeding the
/// source makes a run reproducible.
// TODO: replace the coin flip with a capacity-based bin packing rule.
pub struct BinAssigner<R: Rng> {
    counter: u32,
    rng: R,
}

impl<R: Rng> BinAssigner<R> {
    pub fn new(rng: R) -> BinAssigner<R> {
        BinAssigner { counter: 1, rng }
    }

    /// The label of the next manifest row.
    pub fn next_label(&mut self) -> String {
        let label = format!("Bin {}", self.counter);
        if self.rng.gen_bool(0.5) {
            self.counter += 1;
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::BinAssigner;

    #[test]
    fn starts_at_bin_one() {
        let mut assigner = BinAssigner::new(StdRng::seed_from_u64(42));
        assert_eq!(assigner.next_label(), "Bin 1");
    }

    #[test]
    fn advances_by_at_most_one_bin_per_row() {
        let mut assigner = BinAssigner::new(StdRng::seed_from_u64(9));
        let numbers: Vec<u32> = (0..100)
            .map(|_| {
                assigner
                    .next_label()
                    .strip_prefix("Bin ")
                    .unwrap()
                    .parse()
                    .unwrap()
            })
            .collect();
        assert_eq!(numbers[0], 1);
        for w in numbers.windows(2) {
            assert!(w[1] == w[0] || w[1] == w[0] + 1);
        }
        // With 100 fair flips, standing still the whole time is not credible.
        assert!(*numbers.last().unwrap() > 1);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = BinAssigner::new(StdRng::seed_from_u64(7));
        let mut b = BinAssigner::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            assert_eq!(a.next_label(), b.next_label());
        }
    }
}
