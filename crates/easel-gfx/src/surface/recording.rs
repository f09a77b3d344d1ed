use crate::coords::{Affine, Rect, SurfaceSize, Vec2};
use crate::images::ImageHandle;
use crate::paint::{Paint, TextAlign, TextBaseline};

use super::{PathOp, RecordedCmd, Surface, SurfaceCmd};

/// Everything `save`/`restore` captures.
#[derive(Debug, Clone, PartialEq)]
struct DrawState {
    transform: Affine,
    fill_style: Paint,
    stroke_style: Paint,
    line_width: f32,
    font: String,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill_style: Paint::css("#000000"),
            stroke_style: Paint::css("#000000"),
            line_width: 1.0,
            font: String::from("10px sans-serif"),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

/// In-memory [`Surface`] that records primitives instead of rasterizing them.
///
/// Performance characteristics:
/// - every primitive is an O(1) push; no pixel memory is allocated
/// - [`take_commands`](Self::take_commands) hands the frame's stream out and keeps
///   nothing, so long-running hosts should drain it once per frame
///
/// Besides the command stream it counts every state-changing call, which makes
/// "this draw touched nothing" checkable with [`mutation_count`](Self::mutation_count).
#[derive(Debug)]
pub struct RecordingSurface {
    size: SurfaceSize,
    state: DrawState,
    stack: Vec<DrawState>,
    path: Vec<PathOp>,
    commands: Vec<RecordedCmd>,
    mutations: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            state: DrawState::default(),
            stack: Vec::new(),
            path: Vec::new(),
            commands: Vec::new(),
            mutations: 0,
        }
    }

    /// Changes the pixel size. Recorded commands and state are kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = SurfaceSize::new(width, height);
    }

    /// Returns recorded commands in issue order.
    #[inline]
    pub fn commands(&self) -> &[RecordedCmd] {
        &self.commands
    }

    /// Moves the recorded commands out, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<RecordedCmd> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `save` calls not yet matched by a `restore`.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of state-changing calls received since construction.
    #[inline]
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    #[inline]
    pub fn fill_style(&self) -> &Paint {
        &self.state.fill_style
    }

    #[inline]
    pub fn stroke_style(&self) -> &Paint {
        &self.state.stroke_style
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.state.line_width
    }

    #[inline]
    pub fn font(&self) -> &str {
        &self.state.font
    }

    #[inline]
    pub fn text_align(&self) -> TextAlign {
        self.state.text_align
    }

    #[inline]
    pub fn text_baseline(&self) -> TextBaseline {
        self.state.text_baseline
    }

    fn touch(&mut self) {
        self.mutations += 1;
    }

    fn record(&mut self, cmd: SurfaceCmd) {
        self.touch();
        self.commands.push(RecordedCmd { cmd, transform: self.state.transform });
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn save(&mut self) {
        self.touch();
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(saved) = self.stack.pop() {
            self.touch();
            self.state = saved;
        } else {
            log::debug!("RecordingSurface: restore without matching save ignored");
        }
    }

    fn transform(&self) -> Affine {
        self.state.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.touch();
        self.state.transform = transform;
    }

    fn translate(&mut self, offset: Vec2) {
        self.touch();
        self.state.transform = self.state.transform.then(&Affine::translation(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.touch();
        self.state.transform = self.state.transform.then(&Affine::rotation(radians));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.record(SurfaceCmd::ClearRect { rect });
    }

    fn begin_path(&mut self) {
        self.touch();
        self.path.clear();
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32, counterclockwise: bool) {
        self.touch();
        self.path.push(PathOp::Arc { center, radius, start_angle, end_angle, counterclockwise });
    }

    fn close_path(&mut self) {
        self.touch();
        self.path.push(PathOp::Close);
    }

    fn fill(&mut self) {
        let cmd = SurfaceCmd::FillPath {
            path: self.path.clone(),
            paint: self.state.fill_style.clone(),
        };
        self.record(cmd);
    }

    fn stroke(&mut self) {
        let cmd = SurfaceCmd::StrokePath {
            path: self.path.clone(),
            paint: self.state.stroke_style.clone(),
            line_width: self.state.line_width,
        };
        self.record(cmd);
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.touch();
        self.state.fill_style = paint.clone();
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.touch();
        self.state.stroke_style = paint.clone();
    }

    fn set_line_width(&mut self, width: f32) {
        self.touch();
        self.state.line_width = width;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let paint = self.state.fill_style.clone();
        self.record(SurfaceCmd::FillRect { rect, paint });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let paint = self.state.stroke_style.clone();
        let line_width = self.state.line_width;
        self.record(SurfaceCmd::StrokeRect { rect, paint, line_width });
    }

    fn set_font(&mut self, font: &str) {
        self.touch();
        self.state.font = font.to_owned();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.touch();
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.touch();
        self.state.text_baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, at: Vec2) {
        let cmd = SurfaceCmd::FillText {
            text: text.to_owned(),
            at,
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
            paint: self.state.fill_style.clone(),
        };
        self.record(cmd);
    }

    fn stroke_text(&mut self, text: &str, at: Vec2) {
        let cmd = SurfaceCmd::StrokeText {
            text: text.to_owned(),
            at,
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
            paint: self.state.stroke_style.clone(),
            line_width: self.state.line_width,
        };
        self.record(cmd);
    }

    fn draw_image(&mut self, image: &ImageHandle, dest: Rect) {
        self.record(SurfaceCmd::DrawImage { image: image.clone(), source: None, dest });
    }

    fn draw_image_region(&mut self, image: &ImageHandle, source: Rect, dest: Rect) {
        self.record(SurfaceCmd::DrawImage { image: image.clone(), source: Some(source), dest });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── state stack ───────────────────────────────────────────────────────

    #[test]
    fn restore_brings_back_saved_style_and_transform() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.save();
        s.set_fill_style(&Paint::css("red"));
        s.set_line_width(4.0);
        s.translate(Vec2::new(5.0, 5.0));
        s.restore();

        assert_eq!(s.fill_style(), &Paint::css("#000000"));
        assert_eq!(s.line_width(), 1.0);
        assert!(s.transform().is_identity());
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.translate(Vec2::new(1.0, 2.0));
        let before = s.transform();
        s.restore();
        assert_eq!(s.transform(), before);
        assert_eq!(s.mutation_count(), 1);
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn commands_capture_active_transform() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        s.translate(Vec2::new(10.0, 0.0));
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        let cmds = s.commands();
        assert_eq!(cmds.len(), 2);
        assert!(cmds[0].transform.is_identity());
        assert_eq!(cmds[1].transform, Affine::translation(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn fill_snapshots_current_path() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.begin_path();
        s.arc(Vec2::new(5.0, 5.0), 2.0, 0.0, 1.0, false);
        s.close_path();
        s.fill();
        s.begin_path();
        s.fill();

        let SurfaceCmd::FillPath { path, .. } = &s.commands()[0].cmd else {
            panic!("expected a path fill");
        };
        assert_eq!(path.len(), 2);
        let SurfaceCmd::FillPath { path, .. } = &s.commands()[1].cmd else {
            panic!("expected a path fill");
        };
        assert!(path.is_empty());
    }

    #[test]
    fn take_commands_drains() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(s.take_commands().len(), 1);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn resize_updates_size_only() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.resize(20.0, 5.0);
        assert_eq!(s.size(), SurfaceSize::new(20.0, 5.0));
        assert_eq!(s.mutation_count(), 0);
    }
}
