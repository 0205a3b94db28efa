use std::path::PathBuf;

use chrono::Utc;
use clap::{ArgGroup, Parser, Subcommand};

mod data;
mod insights;
mod models;
mod report;
mod stats;

use models::{Metric, SeriesPair};

#[derive(Parser)]
#[command(name = "cognitive-insights")]
#[command(about = "Cognitive skill analytics for student cohorts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-skill cohort averages
    #[command(group(
        ArgGroup::new("source")
            .args(["json", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Averages {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// List the loaded student records
    #[command(group(
        ArgGroup::new("source")
            .args(["json", "csv"])
            .required(true)
            .multiple(false)
    ))]
    List {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Print the generated insight sentences
    #[command(group(
        ArgGroup::new("source")
            .args(["json", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Insights {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Fit and print the least-squares line between two metrics
    #[command(group(
        ArgGroup::new("source")
            .args(["json", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Regression {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "attention")]
        x_metric: Metric,
        #[arg(long, value_enum, default_value = "assessment-score")]
        y_metric: Metric,
        /// Also print the fitted line sampled over 0..100
        #[arg(long)]
        samples: bool,
    },
    /// Generate a markdown report
    #[command(group(
        ArgGroup::new("source")
            .args(["json", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Averages { json, csv } => {
            let records = data::load_records(json.as_deref(), csv.as_deref())?;
            let averages = stats::skill_averages(&records);
            println!("Cohort averages across {} students:", records.len());
            println!("- Assessment score: {:.1}/100", averages.assessment_score);
            println!("- Attention: {:.1}/100", averages.attention);
            println!("- Focus: {:.1}/100", averages.focus);
            println!("- Retention: {:.1}/100", averages.retention);
            println!("- Comprehension: {:.1}/100", averages.comprehension);
            println!("- Engagement time: {:.1} minutes", averages.engagement_time);
        }
        Commands::List { json, csv, limit } => {
            let records = data::load_records(json.as_deref(), csv.as_deref())?;
            if records.is_empty() {
                println!("No student records loaded.");
                return Ok(());
            }
            println!("Loaded {} student records:", records.len());
            for record in records.iter().take(limit) {
                println!(
                    "- #{} {} ({}) score {:.1}, attention {:.1}, engagement {:.1}m, persona {}",
                    record.student_id,
                    record.name,
                    record.class_label,
                    record.assessment_score,
                    record.attention,
                    record.engagement_time,
                    record.persona.as_deref().unwrap_or("-")
                );
            }
        }
        Commands::Insights { json, csv } => {
            let records = data::load_records(json.as_deref(), csv.as_deref())?;
            for sentence in insights::generate(&records) {
                println!("- {sentence}");
            }
        }
        Commands::Regression {
            json,
            csv,
            x_metric,
            y_metric,
            samples,
        } => {
            let records = data::load_records(json.as_deref(), csv.as_deref())?;
            let pair = SeriesPair::from_records(&records, x_metric, y_metric);
            let model = stats::fit_linear(&pair);
            let r = stats::correlation(&pair.x, &pair.y);
            println!(
                "{} vs {}: slope {:.4}, intercept {:.4}, r {:.2}",
                x_metric.label(),
                y_metric.label(),
                model.slope,
                model.intercept,
                r
            );
            if samples {
                for point in stats::sample_line(&model, 0.0, 100.0, 5.0) {
                    println!("- x {:>5.1} y {:>5.1}", point.x, point.y);
                }
            }
        }
        Commands::Report { json, csv, out } => {
            let records = data::load_records(json.as_deref(), csv.as_deref())?;
            let report = report::build_report(&records, Utc::now().date_naive());
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
