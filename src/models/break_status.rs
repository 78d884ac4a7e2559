use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted status tag of a break record.
///
/// The 30–32 minute warning band is only reported when the break ends;
/// such breaks are stored as `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreakStatus {
    #[default]
    Active,
    Completed,
    Overtime,
}

impl BreakStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakStatus::Active => "active",
            BreakStatus::Completed => "completed",
            BreakStatus::Overtime => "overtime",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BreakStatus::Active)
    }

    pub fn is_overtime(&self) -> bool {
        matches!(self, BreakStatus::Overtime)
    }
}

impl fmt::Display for BreakStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
