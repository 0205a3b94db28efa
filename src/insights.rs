use crate::models::{Metric, StudentRecord};
use crate::stats;

/// Renders the insight sentences for a record collection. An empty
/// collection yields a single placeholder; otherwise exactly four
/// sentences, in order: focus, retention, attention, engagement.
pub fn generate(records: &[StudentRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![
            "Load data to see insights generated from correlations and distributions.".to_string(),
        ];
    }

    let scores = stats::series(records, Metric::AssessmentScore);
    let corr_focus = stats::correlation(&stats::series(records, Metric::Focus), &scores);
    let corr_retention = stats::correlation(&stats::series(records, Metric::Retention), &scores);
    let corr_attention = stats::correlation(&stats::series(records, Metric::Attention), &scores);
    let avg_engagement = stats::mean(records, Metric::EngagementTime);

    vec![
        format!(
            "Focus shows {} correlation with performance (r={:.2}).",
            strength(corr_focus),
            corr_focus
        ),
        format!(
            "Retention shows {} correlation with performance (r={:.2}).",
            strength(corr_retention),
            corr_retention
        ),
        format!(
            "Attention has {} correlation with performance (r={:.2}).",
            strength(corr_attention),
            corr_attention
        ),
        format!("Average engagement time is {:.1} minutes.", avg_engagement),
    ]
}

/// Qualitative label for a correlation coefficient. Bands are strict
/// greater-than on abs(r), so a boundary value falls into the lower band.
pub fn strength(r: f64) -> &'static str {
    let ar = r.abs();
    if ar > 0.7 {
        "a strong"
    } else if ar > 0.4 {
        "a moderate"
    } else if ar > 0.2 {
        "a weak"
    } else {
        "little to no"
    }
}
