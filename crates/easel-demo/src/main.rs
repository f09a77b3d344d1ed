//! Headless walkthrough of the easel drawing layer.
//!
//! Renders a fixed number of frames into a [`RecordingSurface`], resolving the
//! pending images partway through, and logs how many commands each frame produced.

mod clock;
mod config;
mod player;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use easel_gfx::RenderContext;
use easel_gfx::coords::{NormPoint, NormSize, Vec2};
use easel_gfx::images::DeferredLoader;
use easel_gfx::logging::{LoggingConfig, init_logging};
use easel_gfx::paint::{Color, Paint, TextAlign, TextBaseline};
use easel_gfx::shapes::{CircleSpec, RectangleSpec, TextSpec};
use easel_gfx::surface::{RecordingSurface, SurfaceCmd};

use clock::FrameClock;
use config::DemoConfig;
use player::{PlayerModel, PlayerSprite};

const BACKGROUND_SRC: &str = "bg.png";
const PLAYER_SRC: &str = "player.png";
const PLAYER_FRAME: Vec2 = Vec2::new(32.0, 48.0);
const PLAYER_FRAMES: u32 = 4;
const SPINNER_FILL: &str = "#e04040";
/// Horizontal sway of the spinner, pixels.
const SPINNER_SWAY: f32 = 60.0;

/// Totals for a finished run.
#[derive(Debug, Default, Clone, PartialEq)]
struct Summary {
    frames: u64,
    commands: usize,
    /// Image draws recorded before the loader resolved anything.
    images_before_resolve: usize,
    /// Image draws recorded after resolution.
    images_after_resolve: usize,
    /// Surface save depth after the last frame; anything but zero is a leak.
    final_save_depth: usize,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env()?;
    log::info!("easel demo starting: {config:?}");

    let summary = run(&config)?;
    log::info!(
        "rendered {} frames, {} commands ({} image draws before resolve, {} after)",
        summary.frames,
        summary.commands,
        summary.images_before_resolve,
        summary.images_after_resolve
    );
    anyhow::ensure!(
        summary.final_save_depth == 0,
        "unbalanced save/restore: depth {} after the last frame",
        summary.final_save_depth
    );
    Ok(())
}

fn run(config: &DemoConfig) -> Result<Summary> {
    let surface = Rc::new(RefCell::new(RecordingSurface::new(config.width, config.height)));
    let loader = Rc::new(DeferredLoader::new());
    let ctx = RenderContext::new(surface.clone(), loader.clone());

    let spinner_fill = Color::from_hex(SPINNER_FILL).with_context(|| format!("bad color {SPINNER_FILL:?}"))?;
    let spinner_home = Vec2::new(config.width * 0.25, config.height * 0.5);

    let background = ctx.background(BACKGROUND_SRC);
    let mut spinner = ctx.rectangle(
        RectangleSpec::new(spinner_home.x, spinner_home.y, 120.0, 80.0)
            .with_fill(spinner_fill)
            .with_stroke("#ffffff")
            .with_line_width(3.0),
    );
    let ring = ctx.circle(
        CircleSpec::new(
            Vec2::new(config.width * 0.75, config.height * 0.5),
            40.0,
            Color::rgb(64, 128, 255).with_alpha(0.6),
            "#ffffff",
        )
        .with_line_width(2.0),
    );
    let mut label = ctx.letters(
        TextSpec::new("", "16px monospace", 12.0, 12.0)
            .with_align(TextAlign::Left)
            .with_baseline(TextBaseline::Top)
            .with_fill("#ffffff"),
    );
    let mut player = PlayerSprite::new(&ctx, PLAYER_SRC, PLAYER_FRAME, NormSize::new(0.04, 0.06));
    let mut model = PlayerModel { position: NormPoint::new(0.5, 0.3), direction: 0.0 };
    let marker: Paint = Color::from_srgb_u8(0xFF, 0xD0, 0x30, 0xFF).into();

    let mut clock = FrameClock::new();
    let mut summary = Summary::default();

    for frame in 0..config.frames {
        let time = clock.tick();

        if frame == config.resolve_at {
            let bg = loader.complete(BACKGROUND_SRC, config.width as u32, config.height as u32);
            let sheet = loader.complete(PLAYER_SRC, PLAYER_FRAME.x as u32 * PLAYER_FRAMES, PLAYER_FRAME.y as u32);
            log::info!("frame {frame}: resolved {} image load(s)", bg + sheet);
        }

        spinner.update_rotation(config.spin * time.dt);
        spinner.set_position(spinner_home.x + SPINNER_SWAY * time.elapsed.sin(), spinner_home.y);
        model.direction += config.spin * 0.5 * time.dt;
        player.advance();
        label.set_text(format!("frame {frame}  t={:.2}s", time.elapsed));

        ctx.clear();
        background.draw();
        spinner.draw();
        ring.draw();
        ctx.draw_circle(NormPoint::new(0.5, 0.1), 0.005, &marker);
        player.render(&model);
        label.draw();

        let commands = surface.borrow_mut().take_commands();
        let images = commands
            .iter()
            .filter(|rec| matches!(rec.cmd, SurfaceCmd::DrawImage { .. }))
            .count();
        log::debug!(
            "frame {frame} (clock {}): {} commands, {images} image draws, player frame {}, ready={}",
            time.frame_index,
            commands.len(),
            player.frame(),
            player.is_ready()
        );

        summary.frames += 1;
        summary.commands += commands.len();
        if frame < config.resolve_at {
            summary.images_before_resolve += images;
        } else {
            summary.images_after_resolve += images;
        }
    }

    summary.final_save_depth = surface.borrow().save_depth();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frames: u64, resolve_at: u64) -> DemoConfig {
        DemoConfig { frames, resolve_at, ..DemoConfig::default() }
    }

    #[test]
    fn images_appear_only_after_resolve() {
        let summary = run(&config(6, 3)).unwrap();
        assert_eq!(summary.frames, 6);
        assert_eq!(summary.images_before_resolve, 0);
        // background + player per frame
        assert_eq!(summary.images_after_resolve, 3 * 2);
        assert_eq!(summary.final_save_depth, 0);
    }

    #[test]
    fn never_resolving_draws_no_images() {
        let summary = run(&config(4, 10)).unwrap();
        assert_eq!(summary.images_before_resolve, 0);
        assert_eq!(summary.images_after_resolve, 0);
        assert!(summary.commands > 0);
    }
}
