use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingStatus {
    Warning,
    Error,
    Info,
}

/// One line item with optional indented details
#[derive(Debug, Clone)]
pub struct Finding {
    pub status: FindingStatus,
    pub location: String,
    pub message: String,
    pub details: Vec<String>,
}

impl Finding {
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            FindingStatus::Warning => Icon::Warning,
            FindingStatus::Error => Icon::Error,
            FindingStatus::Info => Icon::Pending,
        }
        .colored(supports_color, supports_unicode);

        let mut out = format!(
            "  {} {} {}\n",
            icon,
            ColoredText::dim(self.location.as_str()).render(supports_color),
            self.message
        );
        for detail in &self.details {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                detail
            ));
        }
        out
    }
}
