use clap::ValueEnum;
use derive_new::new;

pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Force `colored` on or off for the rest of the process
    pub fn apply(self, is_terminal: bool) {
        colored::control::set_override(self.enabled(is_terminal));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenderConfig {
    /// Width of each column, in characters
    pub width: usize,
    pub tab_width: usize,
    pub line_numbers: bool,
    pub color: ColorMode,
    pub pager: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_WIDTH,
            DEFAULT_TAB_WIDTH,
            false,
            ColorMode::default(),
            false,
        )
    }
}
