//! Display derivations for a prediction result. Everything here is pure.

use crate::prediction::PredictionResult;
use strum_macros::{AsRefStr, EnumIter};

/// Coarse display grouping of a diagnosis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DiagnosisCategory {
    Favorable,
    Critical,
    Monitor,
    NeedsEvaluation,
}

impl DiagnosisCategory {
    /// Badge color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Favorable => "#10b981",
            Self::Critical => "#f43f5e",
            Self::Monitor => "#fbbf24",
            Self::NeedsEvaluation => "#6b7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Favorable => "fa-solid fa-heart-circle-check",
            Self::Critical => "fa-solid fa-heart-circle-exclamation",
            Self::Monitor => "fa-solid fa-heart-pulse",
            Self::NeedsEvaluation => "fa-solid fa-stethoscope",
        }
    }

    /// CSS class applied to the badge and recommendation panel.
    pub fn css_class(&self) -> String {
        format!("diagnosis-{}", self.as_ref())
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Critical => "Critical",
            Self::Monitor => "Monitor",
            Self::NeedsEvaluation => "Needs further evaluation",
        }
    }
}

pub fn diagnosis_category(label: &str) -> DiagnosisCategory {
    match label {
        "Good" => DiagnosisCategory::Favorable,
        "Heart Failure" => DiagnosisCategory::Critical,
        "Arrhythmia" => DiagnosisCategory::Monitor,
        _ => DiagnosisCategory::NeedsEvaluation,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub message: &'static str,
    pub category: DiagnosisCategory,
}

pub const DEFAULT_RECOMMENDATION: &str = "Further evaluation needed. Consult a doctor.";

pub fn recommendation(label: &str) -> Recommendation {
    let category = diagnosis_category(label);
    let message = match category {
        DiagnosisCategory::Favorable => "Your heart looks healthy. Keep up regular checkups.",
        DiagnosisCategory::Critical => "Urgent care needed. See a cardiologist now.",
        DiagnosisCategory::Monitor => {
            "Irregular rhythm detected. Schedule a follow-up with a doctor."
        }
        DiagnosisCategory::NeedsEvaluation => DEFAULT_RECOMMENDATION,
    };
    Recommendation { message, category }
}

/// Slice colors, assigned by position. A fifth category reuses the first color.
pub const CHART_PALETTE: [&str; 4] = [
    "rgba(75, 192, 192, 0.6)",
    "rgba(255, 99, 132, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(54, 162, 235, 0.6)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

pub fn chart_data(result: Option<&PredictionResult>) -> Option<ChartData> {
    let result = result?;
    let mut labels = Vec::with_capacity(result.probabilities.len());
    let mut values = Vec::with_capacity(result.probabilities.len());
    let mut colors = Vec::with_capacity(result.probabilities.len());

    for (i, (label, p)) in result.probabilities.iter().enumerate() {
        labels.push(label.to_string());
        values.push(p);
        colors.push(CHART_PALETTE[i % CHART_PALETTE.len()]);
    }

    Some(ChartData {
        labels,
        values,
        colors,
    })
}

impl ChartData {
    fn total(&self) -> f64 {
        self.values.iter().filter(|v| v.is_finite() && **v > 0.0).sum()
    }

    /// Share of each slice in percent. Values are not assumed to sum to 1.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.values
            .iter()
            .map(|v| {
                if total > 0.0 && v.is_finite() && *v > 0.0 {
                    v / total * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// CSS `conic-gradient` that draws the slices in order, clockwise from the top.
    pub fn conic_gradient(&self) -> String {
        let mut stops = Vec::with_capacity(self.values.len());
        let mut start = 0.0;
        for (pct, color) in self.percentages().iter().zip(&self.colors) {
            let end = start + pct;
            stops.push(format!("{} {:.2}% {:.2}%", color, start, end));
            start = end;
        }
        if stops.is_empty() {
            return "conic-gradient(#e5e7eb 0% 100%)".to_string();
        }
        format!("conic-gradient({})", stops.join(", "))
    }
}
