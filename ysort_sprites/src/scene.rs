use rand::{rngs::StdRng, SeedableRng};
use ysort_orst::orst::{Order, Strategy};

use crate::generate::{self, Bounds};
use crate::sprite::{Sprite, Vector2};

/// The sprites on screen and how they are ordered each frame.
///
/// Sprites are sorted ascending by their bottom edge so that the ones further down the screen are
/// drawn last and end up in front.
pub struct Scene {
    sprites: Vec<Sprite>,
    strategy: Strategy,
    rng: StdRng,
}

impl Scene {
    /// The full sheet plus `extra` random sprites. Without a `seed` the generator is seeded from
    /// the operating system.
    pub fn new(bounds: Bounds, extra: usize, strategy: Strategy, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sprites = generate::initial_sprites(&mut rng, bounds, extra);
        log::debug!("generated {} sprites", sprites.len());

        Self {
            sprites,
            strategy,
            rng,
        }
    }

    pub fn from_sprites(sprites: Vec<Sprite>, strategy: Strategy, seed: u64) -> Self {
        Self {
            sprites,
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Appends a random sprite at `position`.
    pub fn spawn_at(&mut self, position: Vector2, bounds: Bounds) {
        let sprite = generate::spawn_at(&mut self.rng, position, bounds);
        log::debug!("spawned sprite at ({}, {})", position.x, position.y);
        self.sprites.push(sprite);
    }

    /// Puts the sprites in drawing order.
    pub fn sort(&mut self) {
        self.strategy.sort(&mut self.sprites, Order::Ascending);
    }

    pub fn advance(&mut self, bounds: Bounds) {
        for sprite in &mut self.sprites {
            sprite.advance(bounds);
        }
    }

    /// One frame: sort, then move everything.
    pub fn step(&mut self, bounds: Bounds) {
        self.sort();
        self.advance(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ysort_orst::orst::is_ordered;

    const SCREEN: Bounds = Bounds::new(1024.0, 768.0);

    #[test]
    fn sort_orders_by_bottom_edge() {
        let mut scene = Scene::new(SCREEN, 200, Strategy::StableSort, Some(1));
        scene.sort();
        assert_eq!(scene.len(), 221);
        assert!(is_ordered(scene.sprites(), Order::Ascending));
    }

    #[test]
    fn spawning_appends() {
        let mut scene = Scene::from_sprites(Vec::new(), Strategy::Loop, 1);
        assert!(scene.is_empty());

        scene.spawn_at(Vector2::new(5.0, 6.0), SCREEN);
        scene.spawn_at(Vector2::new(7.0, 8.0), SCREEN);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.sprites()[1].position, Vector2::new(7.0, 8.0));
    }

    #[test]
    fn same_seed_same_scene() {
        let a = Scene::new(SCREEN, 50, Strategy::Sort, Some(42));
        let b = Scene::new(SCREEN, 50, Strategy::Sort, Some(42));
        assert_eq!(a.sprites(), b.sprites());
    }
}
