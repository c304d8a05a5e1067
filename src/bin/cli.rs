use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use study_plan::{
    AdaptiveOptions, Locale, PlanRequest,
    adaptive::{DEFAULT_WEEKS, MAX_WEEKS},
    calendar_dataframe, project_calendar,
    render::render_dataframe,
    render_document, save_schedule_to_csv, save_schedule_to_json, save_schedule_to_xlsx,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "study-plan", about = "Generate a multi-week study plan")]
struct Cli {
    /// Save the title and table as text instead of printing them
    #[arg(long)]
    output: Option<PathBuf>,
    /// Save the plan as an Excel workbook (.xlsx)
    #[arg(long)]
    excel: Option<PathBuf>,
    /// Save the plan as a CSV worksheet
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Save the plan as a JSON document
    #[arg(long)]
    json: Option<PathBuf>,
    /// Use the heuristic personalized generator instead of the fixed mockup
    #[arg(long)]
    ai_personalized: bool,
    /// Weekly study minutes for the personalized generator
    #[arg(long, default_value_t = 180, allow_negative_numbers = true)]
    minutes_per_week: i64,
    /// Focus area for the personalized generator (balanced, conversation, reading, exam)
    #[arg(long, default_value = "balanced")]
    focus: String,
    /// Number of weeks for the personalized generator (1-52)
    #[arg(
        long,
        default_value_t = DEFAULT_WEEKS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WEEKS)),
    )]
    weeks: u32,
    /// Language of labels and goals (en, ja)
    #[arg(long, default_value = "en")]
    locale: Locale,
    /// Print the plan on a calendar starting at this date (YYYY-MM-DD)
    #[arg(long)]
    calendar: Option<NaiveDate>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let request = if cli.ai_personalized {
        PlanRequest::Adaptive(AdaptiveOptions::new(
            cli.minutes_per_week,
            cli.focus.clone(),
            cli.weeks,
        ))
    } else {
        PlanRequest::Fixed
    };
    let catalog = cli.locale.catalog();
    let items = request.build(catalog).context("failed to build schedule")?;
    let title = request.title(catalog);
    let document = render_document(title, &items);

    if let Some(path) = &cli.output {
        fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved schedule to {}", path.display());
    }

    if let Some(path) = &cli.excel {
        save_schedule_to_xlsx(&items, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved schedule to {}", path.display());
    }

    if let Some(path) = &cli.csv {
        save_schedule_to_csv(&items, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved schedule to {}", path.display());
    }

    if let Some(path) = &cli.json {
        save_schedule_to_json(title, &items, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved schedule to {}", path.display());
    }

    if cli.output.is_none() {
        println!("{document}");
    }

    if let Some(start) = cli.calendar {
        let entries =
            project_calendar(&items, start).context("failed to place plan on calendar")?;
        let df = calendar_dataframe(&entries).context("failed to build calendar view")?;
        println!("{}", render_dataframe(&df));
    }

    Ok(())
}
