use ysort_orst::orst::Keyed;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle on the sprite sheet. A negative `width` means the cell is drawn mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One bouncing sprite.
///
/// `horizontal_direction` is `true` while moving right, `vertical_direction` is `true` while
/// moving down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sprite {
    pub position: Vector2,
    pub source_rect: Rectangle,
    pub horizontal_direction: bool,
    pub vertical_direction: bool,
}

impl Sprite {
    /// Bottom edge of the sprite on screen, the key it is depth ordered by.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.position.y + self.source_rect.height
    }

    /// The sheet rectangle to draw. Sprites moving left face left, so the cell is mirrored by
    /// flipping the sign of its width.
    ///
    /// ```
    /// use ysort_sprites::sprite::{Rectangle, Sprite};
    ///
    /// let mut sprite = Sprite {
    ///     source_rect: Rectangle::new(70.0, 0.0, 70.0, 110.0),
    ///     horizontal_direction: true,
    ///     ..Default::default()
    /// };
    /// assert_eq!(sprite.draw_source().width, 70.0);
    ///
    /// sprite.horizontal_direction = false;
    /// assert_eq!(sprite.draw_source(), Rectangle::new(70.0, 0.0, -70.0, 110.0));
    /// ```
    pub fn draw_source(&self) -> Rectangle {
        let Rectangle {
            x,
            y,
            width,
            height,
        } = self.source_rect;

        if self.horizontal_direction {
            self.source_rect
        } else {
            Rectangle::new(x, y, -width, height)
        }
    }
}

impl Keyed for Sprite {
    type Key = f32;

    #[inline]
    fn key(&self) -> f32 {
        self.depth()
    }
}
