use clap::ValueEnum;

#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub student_id: i64,
    pub name: String,
    pub class_label: String,
    pub comprehension: f64,
    pub attention: f64,
    pub focus: f64,
    pub retention: f64,
    pub assessment_score: f64,
    pub engagement_time: f64,
    pub persona: Option<String>,
}

/// Typed selector for the numeric record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Comprehension,
    Attention,
    Focus,
    Retention,
    AssessmentScore,
    EngagementTime,
}

impl Metric {
    pub fn value(&self, record: &StudentRecord) -> f64 {
        match self {
            Metric::Comprehension => record.comprehension,
            Metric::Attention => record.attention,
            Metric::Focus => record.focus,
            Metric::Retention => record.retention,
            Metric::AssessmentScore => record.assessment_score,
            Metric::EngagementTime => record.engagement_time,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Comprehension => "comprehension",
            Metric::Attention => "attention",
            Metric::Focus => "focus",
            Metric::Retention => "retention",
            Metric::AssessmentScore => "assessment score",
            Metric::EngagementTime => "engagement time",
        }
    }
}

/// Two index-aligned series projected out of a record collection.
/// Lengths are equal by construction.
#[derive(Debug, Clone)]
pub struct SeriesPair {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SeriesPair {
    pub fn from_records(records: &[StudentRecord], x: Metric, y: Metric) -> Self {
        SeriesPair {
            x: records.iter().map(|r| x.value(r)).collect(),
            y: records.iter().map(|r| y.value(r)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct SkillAverages {
    pub assessment_score: f64,
    pub attention: f64,
    pub focus: f64,
    pub retention: f64,
    pub comprehension: f64,
    pub engagement_time: f64,
}
