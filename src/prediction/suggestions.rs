//! Suggestions Module
//! Maps a prediction label to a fixed list of recommendations.

/// Label the service uses for the urgent branch.
pub const HIGH_RISK_LABEL: &str = "High Risk";

const URGENT: [&str; 3] = [
    "We recommend consulting a healthcare professional immediately.",
    "Maintain a healthy diet.",
    "Exercise regularly.",
];

const MAINTENANCE: [&str; 3] = [
    "Keep up your healthy habits.",
    "Regular check-ups are recommended.",
    "Stay active and engage in regular physical activity.",
];

/// Recommendation set shown below the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestions {
    /// Shown for the high risk label
    Urgent,
    /// Shown for every other label
    Maintenance,
}

impl Suggestions {
    /// Pick the set for a label. Only an exact match is urgent.
    pub fn for_label(label: &str) -> Self {
        if label == HIGH_RISK_LABEL {
            Suggestions::Urgent
        } else {
            Suggestions::Maintenance
        }
    }

    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Suggestions::Urgent => &URGENT,
            Suggestions::Maintenance => &MAINTENANCE,
        }
    }
}
