use crate::models::{LinePoint, Metric, RegressionModel, SeriesPair, SkillAverages, StudentRecord};

/// Minimum denominator for the correlation and regression formulas.
/// Keeps a zero-variance series from producing NaN or infinity; the
/// result degrades toward 0 instead.
pub const DENOMINATOR_FLOOR: f64 = 1e-9;

pub fn mean(records: &[StudentRecord], metric: Metric) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| metric.value(r)).sum();
    total / records.len() as f64
}

pub fn skill_averages(records: &[StudentRecord]) -> SkillAverages {
    SkillAverages {
        assessment_score: mean(records, Metric::AssessmentScore),
        attention: mean(records, Metric::Attention),
        focus: mean(records, Metric::Focus),
        retention: mean(records, Metric::Retention),
        comprehension: mean(records, Metric::Comprehension),
        engagement_time: mean(records, Metric::EngagementTime),
    }
}

pub fn series(records: &[StudentRecord], metric: Metric) -> Vec<f64> {
    records.iter().map(|r| metric.value(r)).collect()
}

/// Pearson product-moment coefficient over the common prefix of the two
/// series. Empty input returns 0.
pub fn correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let mean_a = a[..n].iter().sum::<f64>() / n as f64;
    let mean_b = b[..n].iter().sum::<f64>() / n as f64;

    let mut products = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        products += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    products / (var_a * var_b).sqrt().max(DENOMINATOR_FLOOR)
}

/// Ordinary least squares fit. Empty input yields the flat line y = 0.
pub fn fit_linear(pair: &SeriesPair) -> RegressionModel {
    let len = pair.x.len().min(pair.y.len());
    let n = len.max(1) as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for i in 0..len {
        sum_x += pair.x[i];
        sum_y += pair.y[i];
        sum_xy += pair.x[i] * pair.y[i];
        sum_x2 += pair.x[i] * pair.x[i];
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x).max(DENOMINATOR_FLOOR);
    let intercept = (sum_y - slope * sum_x) / n;

    RegressionModel { slope, intercept }
}

/// Evaluates the fitted line at regular steps across the domain, clamping
/// each y to the chart range [0, 100]. Out-of-range values are clipped,
/// never rescaled.
pub fn sample_line(
    model: &RegressionModel,
    domain_start: f64,
    domain_end: f64,
    step: f64,
) -> Vec<LinePoint> {
    if step <= 0.0 || domain_end < domain_start {
        return Vec::new();
    }

    let count = ((domain_end - domain_start) / step).floor() as usize;
    (0..=count)
        .map(|i| {
            let x = domain_start + step * i as f64;
            let y = (model.slope * x + model.intercept).clamp(0.0, 100.0);
            LinePoint { x, y }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(attention: f64, assessment_score: f64) -> StudentRecord {
        StudentRecord {
            student_id: 1,
            name: "Avery Lee".to_string(),
            class_label: "8A".to_string(),
            comprehension: 0.0,
            attention,
            focus: 0.0,
            retention: 0.0,
            assessment_score,
            engagement_time: 0.0,
            persona: None,
        }
    }

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean(&[], Metric::Attention), 0.0);
    }

    #[test]
    fn mean_averages_the_selected_metric() {
        let records = vec![record_with(10.0, 0.0), record_with(20.0, 0.0)];
        assert!((mean(&records, Metric::Attention) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn skill_averages_of_empty_slice_are_all_zero() {
        let averages = skill_averages(&[]);
        assert_eq!(averages.assessment_score, 0.0);
        assert_eq!(averages.attention, 0.0);
        assert_eq!(averages.focus, 0.0);
        assert_eq!(averages.retention, 0.0);
        assert_eq!(averages.comprehension, 0.0);
        assert_eq!(averages.engagement_time, 0.0);
    }

    #[test]
    fn correlation_of_series_with_itself_is_one() {
        let series = vec![3.0, 7.0, 11.0, 2.0, 40.0];
        assert!((correlation(&series, &series) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_with_constant_series_is_near_zero() {
        let varying = vec![1.0, 2.0, 3.0, 4.0];
        let constant = vec![5.0, 5.0, 5.0, 5.0];
        assert!(correlation(&varying, &constant).abs() < 1e-6);
    }

    #[test]
    fn correlation_is_symmetric() {
        let a = vec![1.0, 4.0, 2.0, 8.0];
        let b = vec![3.0, 1.0, 7.0, 2.0];
        assert_eq!(correlation(&a, &b), correlation(&b, &a));
    }

    #[test]
    fn correlation_of_empty_series_is_zero() {
        assert_eq!(correlation(&[], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn correlation_truncates_to_common_length() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0, 3.0, 99.0];
        assert!((correlation(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_linear_recovers_exact_line() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 3.0).collect();
        let model = fit_linear(&SeriesPair { x, y });
        assert!((model.slope - 2.0).abs() < 1e-9);
        assert!((model.intercept - 3.0).abs() < 1e-9);
    }

    #[test]
    fn fit_linear_on_empty_input_is_flat_zero_line() {
        let model = fit_linear(&SeriesPair {
            x: Vec::new(),
            y: Vec::new(),
        });
        assert_eq!(model.slope, 0.0);
        assert_eq!(model.intercept, 0.0);
    }

    #[test]
    fn sample_line_covers_default_domain() {
        let model = RegressionModel {
            slope: 1.0,
            intercept: 0.0,
        };
        let points = sample_line(&model, 0.0, 100.0, 5.0);
        assert_eq!(points.len(), 21);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[20].x, 100.0);
    }

    #[test]
    fn sample_line_clamps_to_chart_range() {
        let steep = RegressionModel {
            slope: 3.0,
            intercept: -50.0,
        };
        let points = sample_line(&steep, 0.0, 100.0, 5.0);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[20].y, 100.0);
        assert!(points.iter().all(|p| (0.0..=100.0).contains(&p.y)));
    }

    #[test]
    fn sample_line_rejects_non_positive_step() {
        let model = RegressionModel {
            slope: 1.0,
            intercept: 0.0,
        };
        assert!(sample_line(&model, 0.0, 100.0, 0.0).is_empty());
        assert!(sample_line(&model, 0.0, 100.0, -5.0).is_empty());
    }

    #[test]
    fn attention_pair_fits_identity_line() {
        let records = vec![record_with(50.0, 50.0), record_with(100.0, 100.0)];
        let pair = SeriesPair::from_records(&records, Metric::Attention, Metric::AssessmentScore);
        let model = fit_linear(&pair);
        assert!((model.slope - 1.0).abs() < 1e-6);
        assert!(model.intercept.abs() < 1e-6);
        assert!((correlation(&pair.x, &pair.y) - 1.0).abs() < 1e-6);
    }
}
