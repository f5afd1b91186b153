use rand::{rngs::StdRng, Rng, SeedableRng};
use ysort_orst::orst::{DepthKey, Keyed};
use ysort_orst::points::{self, Point};
use ysort_sprites::generate::{self, Bounds};
use ysort_sprites::sprite::Sprite;

pub const SEED: u64 = 0x5EED;
pub const SCREEN: Bounds = Bounds::new(1920.0, 1080.0);

/// A record that remembers where it started, so tests can tell equal keys apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i32,
    pub tag: usize,
}

impl Keyed for Tagged {
    type Key = i32;

    fn key(&self) -> i32 {
        self.key
    }
}

pub fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

/// Inputs every ordering strategy gets tested against.
pub struct TestRecords {
    /// `x = i`, `y = n - i` with n = 10000.
    pub reversed: Vec<Point>,
    /// Random points from a fixed seed.
    pub shuffled: Vec<Point>,
    /// Few distinct keys, many repeats.
    pub duplicates: Vec<Tagged>,
    /// Random sprites on a 1920x1080 screen.
    pub sprites: Vec<Sprite>,
}

impl TestRecords {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);

        let reversed = points::reversed(10_000);
        let shuffled = points::random(2_000, &mut rng);

        let keys: Vec<i32> = (0..500).map(|_| rng.gen_range(0..8)).collect();
        let duplicates = tagged(&keys);

        let sprites = generate::initial_sprites(&mut rng, SCREEN, 500);

        TestRecords {
            reversed,
            shuffled,
            duplicates,
            sprites,
        }
    }
}

impl Default for TestRecords {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted copies of the keys, for checking that a result is a permutation of its input.
pub fn sorted_keys<T: Keyed>(records: &[T]) -> Vec<T::Key> {
    let mut keys: Vec<_> = records.iter().map(Keyed::key).collect();
    keys.sort_by(DepthKey::cmp_key);
    keys
}
