//! Random sprites laid out on a fixed sprite sheet.

use rand::Rng;

use crate::sprite::{Rectangle, Sprite, Vector2};

pub const SPRITE_WIDTH: u32 = 70;
pub const SPRITE_HEIGHT: u32 = 110;
pub const SHEET_COLUMNS: u32 = 7;
pub const SHEET_ROWS: u32 = 3;

/// Size of the area sprites live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// Inclusive on both ends. A screen narrower than two sprites gives `hi < lo`, which is swapped
// rather than rejected.
fn random_between<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> f32 {
    rng.gen_range(lo.min(hi)..=lo.max(hi)) as f32
}

/// A sprite showing sheet cell (`row`, `col`) somewhere inside `bounds`, at least one sprite
/// away from every edge, heading in a random direction.
pub fn generate_sprite<R: Rng + ?Sized>(rng: &mut R, row: u32, col: u32, bounds: Bounds) -> Sprite {
    let (width, height) = (SPRITE_WIDTH as i32, SPRITE_HEIGHT as i32);

    // `as` saturates, so a huge or infinite bound must not overflow here.
    let x = random_between(rng, width, (bounds.width as i32).saturating_sub(width));
    let y = random_between(rng, height, (bounds.height as i32).saturating_sub(height));

    Sprite {
        position: Vector2::new(x, y),
        source_rect: Rectangle::new(
            (SPRITE_WIDTH * col) as f32,
            (SPRITE_HEIGHT * row) as f32,
            SPRITE_WIDTH as f32,
            SPRITE_HEIGHT as f32,
        ),
        horizontal_direction: rng.gen_bool(0.5),
        vertical_direction: rng.gen_bool(0.5),
    }
}

/// A sprite for a random sheet cell.
pub fn random_sprite<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Sprite {
    let row = rng.gen_range(0..SHEET_ROWS);
    let col = rng.gen_range(0..SHEET_COLUMNS);
    generate_sprite(rng, row, col, bounds)
}

/// A random sprite placed at `position`, e.g. where the mouse was clicked.
pub fn spawn_at<R: Rng + ?Sized>(rng: &mut R, position: Vector2, bounds: Bounds) -> Sprite {
    Sprite {
        position,
        ..random_sprite(rng, bounds)
    }
}

/// Every sheet cell once, row by row, followed by `extra` random ones.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use ysort_sprites::generate::{initial_sprites, Bounds};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let sprites = initial_sprites(&mut rng, Bounds::new(1920.0, 1080.0), 10);
/// assert_eq!(sprites.len(), 21 + 10);
/// ```
pub fn initial_sprites<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, extra: usize) -> Vec<Sprite> {
    let cells = (SHEET_ROWS * SHEET_COLUMNS) as usize;
    let mut sprites = Vec::with_capacity(cells + extra);

    for i in 0..SHEET_ROWS * SHEET_COLUMNS {
        sprites.push(generate_sprite(
            rng,
            i / SHEET_COLUMNS,
            i % SHEET_COLUMNS,
            bounds,
        ));
    }
    sprites.extend((0..extra).map(|_| random_sprite(rng, bounds)));

    sprites
}

/// `count` sprites with random cells.
pub fn random_sprites<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, count: usize) -> Vec<Sprite> {
    (0..count).map(|_| random_sprite(rng, bounds)).collect()
}
