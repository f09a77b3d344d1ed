use easel_gfx::RenderContext;
use easel_gfx::coords::{NormPoint, NormSize, Vec2};
use easel_gfx::images::SpriteSheet;

/// Game-side player state, in normalized units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayerModel {
    pub position: NormPoint,
    /// Facing, radians.
    pub direction: f32,
}

/// Draws a [`PlayerModel`] from a horizontal sprite sheet.
#[derive(Debug)]
pub struct PlayerSprite {
    ctx: RenderContext,
    sheet: SpriteSheet,
    size: NormSize,
    frame: u32,
}

impl PlayerSprite {
    pub fn new(ctx: &RenderContext, src: &str, frame_size: Vec2, size: NormSize) -> Self {
        Self {
            ctx: ctx.clone(),
            sheet: ctx.sprite_sheet(src, frame_size),
            size,
            frame: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.sheet.is_ready()
    }

    /// Steps the walk cycle. Wraps once the sheet is loaded and its frame count known.
    pub fn advance(&mut self) {
        self.frame = match self.sheet.frame_count() {
            Some(count) if count > 0 => (self.frame + 1) % count,
            _ => self.frame.wrapping_add(1),
        };
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// save, rotate about the player, draw the current frame, restore.
    pub fn render(&self, model: &PlayerModel) {
        self.ctx.save_context();
        self.ctx.rotate_canvas(model.position, model.direction);
        self.sheet.draw_frame(self.frame, model.position, self.size);
        self.ctx.restore_context();
    }
}
