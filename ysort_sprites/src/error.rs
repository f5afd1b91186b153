use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::result::Result as StdResult;

/// Alias for `Result<T, ysort_sprites::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Everything that can go wrong while putting sprites on screen.
#[derive(Debug)]
pub enum Error {
    /// Raised by SDL2 while creating the window, the renderer or a texture, or while drawing.
    /// SDL2 reports these as plain strings.
    Sdl(String),

    /// Raised when the sprite sheet is missing or cannot be decoded.
    Texture {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Sdl(message) => write!(f, "SDL error: {message}"),
            Error::Texture { path, source } => {
                write!(f, "failed to load sprite sheet {}: {source}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Sdl(_) => None,
            Error::Texture { source, .. } => Some(source),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Sdl(message)
    }
}
