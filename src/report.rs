use std::fmt::Write;

use chrono::NaiveDate;

use crate::insights;
use crate::models::{Metric, SeriesPair, StudentRecord};
use crate::stats;

pub fn build_report(records: &[StudentRecord], generated_on: NaiveDate) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Cognitive Skill Report");
    let _ = writeln!(
        output,
        "Generated on {} from {} student records",
        generated_on,
        records.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Cohort Averages");

    if records.is_empty() {
        let _ = writeln!(output, "No student records loaded.");
    } else {
        let averages = stats::skill_averages(records);
        let _ = writeln!(
            output,
            "- Assessment score: {:.1}/100",
            averages.assessment_score
        );
        let _ = writeln!(output, "- Attention: {:.1}/100", averages.attention);
        let _ = writeln!(output, "- Focus: {:.1}/100", averages.focus);
        let _ = writeln!(output, "- Retention: {:.1}/100", averages.retention);
        let _ = writeln!(output, "- Comprehension: {:.1}/100", averages.comprehension);
        let _ = writeln!(
            output,
            "- Engagement time: {:.1} minutes",
            averages.engagement_time
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Skill Correlations");

    if records.is_empty() {
        let _ = writeln!(output, "No student records loaded.");
    } else {
        let scores = stats::series(records, Metric::AssessmentScore);
        for metric in [Metric::Focus, Metric::Retention, Metric::Attention] {
            let r = stats::correlation(&stats::series(records, metric), &scores);
            let _ = writeln!(
                output,
                "- {} vs assessment score: r={:.2}",
                metric.label(),
                r
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Attention Regression");

    if records.is_empty() {
        let _ = writeln!(output, "No student records loaded.");
    } else {
        let pair = SeriesPair::from_records(records, Metric::Attention, Metric::AssessmentScore);
        let model = stats::fit_linear(&pair);
        let _ = writeln!(
            output,
            "Best-fit line: score = {:.3} * attention + {:.3}",
            model.slope, model.intercept
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Insights");

    for sentence in insights::generate(records) {
        let _ = writeln!(output, "- {}", sentence);
    }

    output
}
