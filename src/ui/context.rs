use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Emit GitHub Actions workflow annotations
    pub annotations: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
            annotations: caps.is_github_actions,
        }
    }

    /// Plain rendering for files: no color, ASCII-safe icons, no annotations
    pub fn plain(verbose: u8) -> Self {
        Self {
            verbose,
            caps: TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
                is_github_actions: false,
            },
            color: false,
            unicode: false,
            annotations: false,
        }
    }
}
