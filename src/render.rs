//! Drawing capability used by the game, and its SDL2 canvas implementation.

use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use strum_macros::{AsRefStr, EnumIter};
use tracing::debug;

use crate::asset::Asset;
use crate::error::{AssetError, RenderError};

/// Full-screen images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Image {
    Jumpscare,
}

/// The four drawing primitives the game needs.
pub trait RenderSurface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, color: Color, rect: Rect) -> Result<(), RenderError>;
    /// Stretches `image` over the whole surface.
    fn blit_fullscreen(&mut self, image: Image) -> Result<(), RenderError>;
    fn present(&mut self);
}

/// A window canvas plus the images it can blit.
pub struct CanvasSurface {
    canvas: Canvas<Window>,
    jumpscare: Texture,
    // Textures are created from this; it must outlive them.
    _texture_creator: TextureCreator<WindowContext>,
}

impl CanvasSurface {
    /// Loads every [`Image`] from `root` and wraps `canvas`.
    pub fn new(canvas: Canvas<Window>, root: &Path) -> Result<Self, AssetError> {
        let texture_creator = canvas.texture_creator();
        let jumpscare = Self::load_image(&texture_creator, root, Image::Jumpscare)?;

        Ok(Self {
            canvas,
            jumpscare,
            _texture_creator: texture_creator,
        })
    }

    fn load_image(
        texture_creator: &TextureCreator<WindowContext>,
        root: &Path,
        image: Image,
    ) -> Result<Texture, AssetError> {
        let asset = Asset::Image(image);
        let bytes = asset.get_bytes(root)?;
        let texture = texture_creator
            .load_texture_bytes(&bytes)
            .map_err(|reason| AssetError::Decode {
                path: asset.resolve(root),
                reason,
            })?;
        debug!(image = image.as_ref(), "Loaded image");
        Ok(texture)
    }

    /// Whether the window currently has keyboard focus.
    pub fn is_focused(&self) -> bool {
        let flag = sdl2::sys::SDL_WindowFlags::SDL_WINDOW_INPUT_FOCUS as u32;
        self.canvas.window().window_flags() & flag != 0
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn fill_rect(&mut self, color: Color, rect: Rect) -> Result<(), RenderError> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect).map_err(RenderError::Draw)
    }

    fn blit_fullscreen(&mut self, image: Image) -> Result<(), RenderError> {
        // `None` destination stretches across the logical canvas
        let texture = match image {
            Image::Jumpscare => &self.jumpscare,
        };
        self.canvas.copy(texture, None, None).map_err(RenderError::Draw)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
