//! Risk categories and the result of a lookup.

use std::str::FromStr;

/// Sentinel printed when no risk polygon contains the point
pub const NO_RISK: &str = "No severe weather risk";

/// Categorical outlook level, ordered by increasing severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    /// General thunderstorms
    Tstm,
    /// Marginal
    Mrgl,
    /// Slight
    Slgt,
    /// Enhanced
    Enh,
    /// Moderate
    Mdt,
    High,
}

impl RiskLevel {
    pub fn all() -> &'static [RiskLevel] {
        &[
            RiskLevel::Tstm,
            RiskLevel::Mrgl,
            RiskLevel::Slgt,
            RiskLevel::Enh,
            RiskLevel::Mdt,
            RiskLevel::High,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            RiskLevel::Tstm => "TSTM",
            RiskLevel::Mrgl => "MRGL",
            RiskLevel::Slgt => "SLGT",
            RiskLevel::Enh => "ENH",
            RiskLevel::Mdt => "MDT",
            RiskLevel::High => "HIGH",
        }
    }

    /// Default (stroke, fill) colors used when the feed's own are unusable
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            RiskLevel::Tstm => ("#55BB55", "#C1E9C1"),
            RiskLevel::Mrgl => ("#005500", "#66A366"),
            RiskLevel::Slgt => ("#DDAA00", "#FFE066"),
            RiskLevel::Enh => ("#FF6600", "#FFA366"),
            RiskLevel::Mdt => ("#CD0000", "#E06666"),
            RiskLevel::High => ("#FF00FF", "#EE99EE"),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts the short codes and the long `LABEL2` texts
impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let code = match upper.as_str() {
            "GENERAL THUNDERSTORMS RISK" | "GENERAL THUNDERSTORMS" => "TSTM",
            "MARGINAL RISK" | "MARGINAL" => "MRGL",
            "SLIGHT RISK" | "SLIGHT" => "SLGT",
            "ENHANCED RISK" | "ENHANCED" => "ENH",
            "MODERATE RISK" | "MODERATE" => "MDT",
            "HIGH RISK" => "HIGH",
            other => other,
        };

        RiskLevel::all()
            .iter()
            .copied()
            .find(|level| level.code() == code)
            .ok_or_else(|| anyhow::anyhow!("Unknown risk level '{}'", s))
    }
}

/// Outcome of classifying a point against the outlook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskAssessment {
    NoRisk,
    Risk {
        label: String,
        description: Option<String>,
    },
}

impl RiskAssessment {
    pub fn label(&self) -> &str {
        match self {
            RiskAssessment::NoRisk => NO_RISK,
            RiskAssessment::Risk { label, .. } => label.as_str(),
        }
    }

    /// Long form text, falling back to the label
    pub fn description(&self) -> &str {
        match self {
            RiskAssessment::NoRisk => NO_RISK,
            RiskAssessment::Risk { label, description } => {
                description.as_deref().unwrap_or(label.as_str())
            }
        }
    }
}

impl std::fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
