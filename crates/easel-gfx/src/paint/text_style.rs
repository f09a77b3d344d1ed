/// Horizontal text anchoring relative to the draw position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

/// Vertical text anchoring relative to the draw position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}
