//! Projection of an analysis result into a summary view.

use ecg_classify_catalog::{SeverityTier, lookup};
use ecg_classify_contract::AnalysisResult;

/// One secondary statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatItem {
    /// Display label.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

/// Rendered classification summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Raw class code.
    pub code: String,
    /// Display name from the catalog (or the raw code).
    pub name: String,
    /// Catalog description.
    pub description: String,
    /// Styling tier.
    pub tier: SeverityTier,
    /// Icon token.
    pub icon: String,
    /// Confidence label (`97.0%` or `N/A`).
    pub confidence: String,
    /// Secondary statistics, always six entries in fixed order.
    pub stats: Vec<StatItem>,
}

impl ResultView {
    /// Looks up a statistic by label.
    pub fn stat(&self, label: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }
}

/// Label of the class index statistic.
pub const STAT_CLASS_INDEX: &str = "Class Index";
/// Label of the lead count statistic.
pub const STAT_LEADS: &str = "Leads";
/// Label of the sample length statistic.
pub const STAT_SIGNAL_LENGTH: &str = "Signal Length";
/// Label of the mean amplitude statistic.
pub const STAT_MEAN_AMPLITUDE: &str = "Mean Amplitude";
/// Label of the amplitude deviation statistic.
pub const STAT_STD_AMPLITUDE: &str = "Std Deviation";
/// Label of the amplitude range statistic.
pub const STAT_AMPLITUDE_RANGE: &str = "Amplitude Range";

/// Formats a `[0, 1]` confidence as a one-decimal percentage.
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "N/A".to_string(),
    }
}

/// Builds the summary view for `result`.
pub fn project_result(result: &AnalysisResult) -> ResultView {
    let entry = lookup(&result.predicted_class);
    let stats = &result.ecg_stats;

    ResultView {
        code: entry.code,
        name: entry.name,
        description: entry.description,
        tier: entry.tier,
        icon: entry.icon,
        confidence: format_confidence(result.confidence),
        stats: vec![
            StatItem {
                label: STAT_CLASS_INDEX,
                value: result.predicted_class_index.to_string(),
            },
            StatItem {
                label: STAT_LEADS,
                value: stats.num_leads.to_string(),
            },
            StatItem {
                label: STAT_SIGNAL_LENGTH,
                value: stats.signal_length.to_string(),
            },
            StatItem {
                label: STAT_MEAN_AMPLITUDE,
                value: format!("{:.3}", stats.mean_amplitude),
            },
            StatItem {
                label: STAT_STD_AMPLITUDE,
                value: format!("{:.3}", stats.std_amplitude),
            },
            StatItem {
                label: STAT_AMPLITUDE_RANGE,
                value: format!("{:.3}", stats.amplitude_range()),
            },
        ],
    }
}
