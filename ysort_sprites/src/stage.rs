//! The SDL2 side of the animation: one owned context holding the window, the renderer and the
//! event pump. Dropping the [`Stage`] closes everything, whichever way the frame loop exits.

use std::path::Path;
use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};
use ysort_orst::orst::Strategy;

use crate::error::{Error, Result};
use crate::frame::{FpsCounter, FrameLimiter};
use crate::generate::Bounds;
use crate::scene::Scene;
use crate::sheet::SheetImage;
use crate::sprite::{Sprite, Vector2};

pub const TITLE: &str = "Sprites Example";
pub const BACKGROUND: Color = Color::RGB(2, 47, 64);

#[derive(Debug, Clone)]
pub struct StageConfig {
    pub title: String,
    /// Fullscreen at the desktop resolution. `width` and `height` are ignored when set.
    pub fullscreen: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            fullscreen: true,
            width: 1280,
            height: 720,
        }
    }
}

/// What happened since the last frame.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub quit: bool,
    pub clicks: Vec<Vector2>,
}

pub struct Stage {
    // Field order is drop order: the renderer goes before the subsystems it came from.
    canvas: Canvas<Window>,
    event_pump: EventPump,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl Stage {
    pub fn open(config: &StageConfig) -> Result<Self> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;

        let builder = if config.fullscreen {
            let mode = video.desktop_display_mode(0)?;
            let mut builder = video.window(&config.title, mode.w as u32, mode.h as u32);
            builder.fullscreen_desktop();
            builder
        } else {
            let mut builder = video.window(&config.title, config.width, config.height);
            builder.position_centered();
            builder
        };

        let window = builder.build().map_err(|e| Error::Sdl(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let event_pump = sdl.event_pump()?;

        let (width, height) = canvas.output_size()?;
        log::debug!("opened {width}x{height} window");

        Ok(Self {
            canvas,
            event_pump,
            _video: video,
            _sdl: sdl,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Current drawable size.
    pub fn bounds(&self) -> Result<Bounds> {
        let (width, height) = self.canvas.output_size()?;
        Ok(Bounds::new(width as f32, height as f32))
    }

    pub fn poll(&mut self) -> FrameInput {
        let mut input = FrameInput::default();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => input.quit = true,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => input.clicks.push(Vector2::new(x as f32, y as f32)),
                _ => {}
            }
        }
        input
    }

    /// Clears the screen, draws `sprites` in order and presents the frame.
    pub fn draw(&mut self, sheet: &Texture, sprites: &[Sprite]) -> Result<()> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();

        for sprite in sprites {
            let source = sprite.draw_source();
            let (width, height) = (source.width.abs() as u32, source.height as u32);

            self.canvas.copy_ex(
                sheet,
                Some(Rect::new(source.x as i32, source.y as i32, width, height)),
                Some(Rect::new(
                    sprite.position.x as i32,
                    sprite.position.y as i32,
                    width,
                    height,
                )),
                0.0,
                None::<Point>,
                source.width < 0.0,
                false,
            )?;
        }

        self.canvas.present();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| Error::Sdl(e.to_string()))
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        log::debug!("closing window");
    }
}

/// Uploads the sprite sheet at `path` as an alpha blended texture.
pub fn load_sheet<'a>(
    creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>> {
    let image = SheetImage::open(path)?;

    let mut texture = creator
        .create_texture_static(PixelFormatEnum::ARGB8888, image.width(), image.height())
        .map_err(|e| Error::Sdl(e.to_string()))?;
    texture
        .update(None, image.pixels(), image.pitch())
        .map_err(|e| Error::Sdl(e.to_string()))?;
    texture.set_blend_mode(BlendMode::Blend);

    Ok(texture)
}

/// Settings for [`animate`].
#[derive(Debug, Clone)]
pub struct AnimationOptions {
    pub sheet: std::path::PathBuf,
    pub extra: usize,
    pub strategy: Strategy,
    pub fps: u32,
    pub seed: Option<u64>,
}

/// Opens the window and runs the frame loop until the window is closed or Escape is pressed.
///
/// Each frame: spawn a sprite per left click, sort, move, draw, present, then wait out the
/// frame budget.
pub fn animate(config: &StageConfig, options: &AnimationOptions) -> Result<()> {
    let mut stage = Stage::open(config)?;
    let creator = stage.texture_creator();
    let sheet = load_sheet(&creator, &options.sheet)?;

    let mut scene = Scene::new(stage.bounds()?, options.extra, options.strategy, options.seed);
    let mut limiter = FrameLimiter::new(options.fps);
    let mut fps = FpsCounter::new(Instant::now());
    log::info!(
        "animating {} sprites, sorted with {}, {:?} per frame",
        scene.len(),
        scene.strategy(),
        limiter.target()
    );

    loop {
        let input = stage.poll();
        if input.quit {
            break;
        }

        let bounds = stage.bounds()?;
        for position in input.clicks {
            scene.spawn_at(position, bounds);
        }

        scene.step(bounds);
        stage.draw(&sheet, scene.sprites())?;

        if let Some(rate) = fps.tick(Instant::now()) {
            log::debug!("{rate} FPS with {} sprites", scene.len());
            stage.set_title(&format!("{} - {rate} FPS", config.title))?;
        }
        limiter.wait_and_get_delta();
    }

    Ok(())
}
