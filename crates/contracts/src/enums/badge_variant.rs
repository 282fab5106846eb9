use serde::{Deserialize, Serialize};

/// Варианты бейджей статуса/категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeVariant {
    /// CSS-модификатор бейджа
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}
