use anyhow::{Context, Result};

/// Demo run parameters.
///
/// Every field can be overridden with an `EASEL_*` environment variable.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Surface width in pixels (`EASEL_WIDTH`).
    pub width: f32,
    /// Surface height in pixels (`EASEL_HEIGHT`).
    pub height: f32,
    /// Frames to render (`EASEL_FRAMES`).
    pub frames: u64,
    /// Frame index at which pending images are resolved (`EASEL_RESOLVE_AT`).
    pub resolve_at: u64,
    /// Spinner speed in radians per second (`EASEL_SPIN`).
    pub spin: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            frames: 120,
            resolve_at: 30,
            spin: 1.5,
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by whatever `EASEL_*` variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        override_with(&lookup, "EASEL_WIDTH", &mut config.width)?;
        override_with(&lookup, "EASEL_HEIGHT", &mut config.height)?;
        override_with(&lookup, "EASEL_FRAMES", &mut config.frames)?;
        override_with(&lookup, "EASEL_RESOLVE_AT", &mut config.resolve_at)?;
        override_with(&lookup, "EASEL_SPIN", &mut config.spin)?;

        anyhow::ensure!(
            config.width > 0.0 && config.height > 0.0,
            "surface must have a positive size, got {}x{}",
            config.width,
            config.height
        );
        Ok(config)
    }
}

fn override_with<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) -> Result<()>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if let Some(raw) = lookup(key) {
        *slot = raw.trim().parse().with_context(|| format!("parsing {key}={raw:?}"))?;
    }
    Ok(())
}
