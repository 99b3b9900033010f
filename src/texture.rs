//! Texture resource
//!
//! Owns at most one GPU texture (a loaded image or a line of rendered text)
//! together with its pixel size. Loading always releases the previous
//! texture first; dropping the resource releases it too.

use image::RgbaImage;
use macroquad::prelude::*;
use std::fs;
use std::path::Path;

/// Error type for texture loading
#[derive(Debug)]
pub enum TextureError {
    Io(std::io::Error),
    Decode(image::ImageError),
    TooLarge { width: u32, height: u32 },
    EmptyText,
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "IO error: {}", e),
            TextureError::Decode(e) => write!(f, "Decode error: {}", e),
            TextureError::TooLarge { width, height } => {
                write!(f, "Image too large for a texture: {}x{}", width, height)
            }
            TextureError::EmptyText => write!(f, "Text has zero width"),
        }
    }
}

impl std::error::Error for TextureError {}

/// Mirroring applied when drawing
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    /// (flip_x, flip_y) as macroquad expects them
    pub fn axes(self) -> (bool, bool) {
        match self {
            Flip::None => (false, false),
            Flip::Horizontal => (true, false),
            Flip::Vertical => (false, true),
            Flip::Both => (true, true),
        }
    }
}

/// Optional transform for [`TextureResource::render_ex`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderParams {
    /// Sub-rectangle of the texture to draw; also sets the destination size
    pub clip: Option<Rect>,
    /// Clockwise rotation in degrees
    pub angle: f32,
    /// Rotation pivot relative to the destination's top-left corner.
    /// `None` rotates about the centre.
    pub pivot: Option<Vec2>,
    pub flip: Flip,
}

/// Make every pixel matching `key` fully transparent (RGBA8 buffer)
pub fn apply_color_key(pixels: &mut [u8], key: [u8; 3]) {
    for px in pixels.chunks_exact_mut(4) {
        if px[..3] == key {
            px[3] = 0;
        }
    }
}

/// Decode image bytes to RGBA and apply the color key
pub fn decode_color_keyed(bytes: &[u8], key: [u8; 3]) -> Result<RgbaImage, TextureError> {
    let mut rgba = image::load_from_memory(bytes)?.to_rgba8();
    apply_color_key(&mut rgba, key);
    Ok(rgba)
}

/// A single owned texture with its dimensions
pub struct TextureResource {
    texture: Option<Texture2D>,
    /// Backing pass for rendered text. `texture` aliases its color
    /// attachment, which is deleted as soon as the pass is dropped.
    text_target: Option<RenderTarget>,
    width: u32,
    height: u32,
    tint: Color,
}

impl TextureResource {
    pub fn new() -> Self {
        Self {
            texture: None,
            text_target: None,
            width: 0,
            height: 0,
            tint: WHITE,
        }
    }

    /// Load an image file, turning `color_key` pixels transparent.
    ///
    /// Any texture held before the call is released, even on failure.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P, color_key: [u8; 3]) -> Result<(), TextureError> {
        self.free();

        let bytes = fs::read(path.as_ref())?;
        let rgba = decode_color_keyed(&bytes, color_key)?;
        self.upload(rgba)
    }

    /// Rasterize one line of text into a fresh texture.
    ///
    /// Draws into an offscreen render target, so this must run between
    /// frames, before the screen is cleared.
    pub fn load_from_rendered_text(
        &mut self,
        text: &str,
        font: &Font,
        font_size: u16,
        color: Color,
    ) -> Result<(), TextureError> {
        self.free();

        let dims = measure_text(text, Some(font), font_size, 1.0);
        if text.is_empty() || dims.width <= 0.0 {
            return Err(TextureError::EmptyText);
        }
        let width = dims.width.ceil() as u32;
        let height = dims.height.ceil().max(1.0) as u32;

        let target = render_target(width, height);
        target.texture.set_filter(FilterMode::Linear);

        // Render targets are stored bottom-up, hence the positive y zoom
        let camera = Camera2D {
            target: vec2(width as f32 / 2.0, height as f32 / 2.0),
            zoom: vec2(2.0 / width as f32, 2.0 / height as f32),
            render_target: Some(target.clone()),
            ..Default::default()
        };

        set_camera(&camera);
        clear_background(Color::new(0.0, 0.0, 0.0, 0.0));
        draw_text_ex(
            text,
            0.0,
            dims.offset_y,
            TextParams {
                font: Some(font),
                font_size,
                color,
                ..Default::default()
            },
        );
        set_default_camera();

        self.texture = Some(target.texture.clone());
        self.text_target = Some(target);
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn upload(&mut self, rgba: RgbaImage) -> Result<(), TextureError> {
        let (width, height) = rgba.dimensions();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(TextureError::TooLarge { width, height });
        }

        let texture = Texture2D::from_rgba8(width as u16, height as u16, rgba.as_raw());
        texture.set_filter(FilterMode::Linear);

        self.texture = Some(texture);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Release the texture. Safe to call repeatedly.
    pub fn free(&mut self) {
        self.texture = None;
        self.text_target = None;
        self.width = 0;
        self.height = 0;
    }

    /// Color modulation applied to subsequent renders
    pub fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        self.tint = Color::from_rgba(red, green, blue, 255);
    }

    pub fn render(&self, x: i32, y: i32) {
        self.render_ex(x, y, &RenderParams::default());
    }

    /// Draw at (x, y) with clipping, rotation and flipping. No-op while unloaded.
    pub fn render_ex(&self, x: i32, y: i32, params: &RenderParams) {
        let Some(texture) = &self.texture else { return };

        let dest = self.dest_rect(x, y, params.clip);
        let (flip_x, flip_y) = params.flip.axes();
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            self.draw_color(),
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                source: params.clip,
                rotation: params.angle.to_radians(),
                flip_x,
                flip_y,
                pivot: params.pivot.map(|p| vec2(dest.x + p.x, dest.y + p.y)),
            },
        );
    }

    /// Screen rectangle covered by a draw at (x, y)
    pub fn dest_rect(&self, x: i32, y: i32, clip: Option<Rect>) -> Rect {
        match clip {
            Some(clip) => Rect::new(x as f32, y as f32, clip.w, clip.h),
            None => Rect::new(x as f32, y as f32, self.width as f32, self.height as f32),
        }
    }

    /// Color every draw is modulated with
    pub fn draw_color(&self) -> Color {
        self.tint
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for TextureResource {
    fn default() -> Self {
        Self::new()
    }
}
