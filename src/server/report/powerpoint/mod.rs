//! PowerPoint deck projection of an aggregated report.
//!
//! [`build_deck`] decides what each slide says; [`package::render_deck`] turns the slides
//! into an Office Open XML presentation.

pub mod package;
mod xml;

use crate::server::{
    model::report::ReportDataset,
    report::statistics::{
        completed_key_results, completion_rate, display_status, in_progress_objectives,
        progress_percent, rank_by_progress,
    },
};

pub use package::render_deck;

/// Completed key results listed on the achievements slide.
pub const ACHIEVEMENT_LIMIT: usize = 5;
/// In-progress objectives suggested as next quarter focus areas.
pub const PLANNING_LIMIT: usize = 4;

pub static NO_ACHIEVEMENTS_PLACEHOLDER: &str = "No completed key results for this period";
pub static NO_PLANNING_PLACEHOLDER: &str = "No objectives currently in progress";

/// Content placed under a slide title.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph(String),
    Bullets(Vec<String>),
    Numbered(Vec<String>),
    Table {
        header: Vec<&'static str>,
        rows: Vec<Vec<String>>,
    },
    /// Italic note shown when a section has nothing to list
    Placeholder(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: String,
    /// Cover slides center their title and body
    pub cover: bool,
    pub body: Vec<Block>,
}

impl Slide {
    fn content(title: &str, body: Vec<Block>) -> Self {
        Self {
            title: title.to_string(),
            cover: false,
            body,
        }
    }
}

/// Describes the deck for a dataset, in presentation order.
pub fn build_deck(dataset: &ReportDataset) -> Vec<Slide> {
    let mut slides = vec![title_slide(dataset), executive_summary_slide(dataset)];
    slides.push(objectives_slide(dataset));

    if dataset.filters.report_type.includes_achievements() {
        slides.push(achievements_slide(dataset));
    }

    slides.push(planning_slide(dataset));
    slides
}

fn title_slide(dataset: &ReportDataset) -> Slide {
    Slide {
        title: format!("OKR Report - {}", dataset.filters.time_period),
        cover: true,
        body: vec![
            Block::Paragraph(dataset.company_name.clone()),
            Block::Paragraph(format!(
                "Generated on {}",
                dataset.generated_at.format("%B %-d, %Y")
            )),
        ],
    }
}

fn executive_summary_slide(dataset: &ReportDataset) -> Slide {
    let summary = &dataset.summary;

    Slide::content(
        "Executive Summary",
        vec![Block::Bullets(vec![
            format!("Team: {}", dataset.team_name),
            format!("Time Period: {}", dataset.filters.time_period),
            format!("Average Progress: {}%", summary.avg_progress),
            format!("Total Objectives: {}", summary.total_objectives),
            format!("Completed Objectives: {}", summary.completed_objectives),
            format!("Completion Rate: {}%", completion_rate(summary)),
        ])],
    )
}

fn objectives_slide(dataset: &ReportDataset) -> Slide {
    let ranked = rank_by_progress(
        &dataset.objectives,
        dataset.filters.report_type.ranked_objective_limit(),
    );

    // An empty set still renders the table with its header row
    let body = Block::Table {
        header: vec!["Objective", "Progress", "Status"],
        rows: ranked
            .iter()
            .map(|entry| {
                let objective = &entry.objective;
                vec![
                    objective.title.clone(),
                    format!("{}%", progress_percent(objective.progress)),
                    display_status(objective.status.as_deref()).to_string(),
                ]
            })
            .collect(),
    };

    Slide::content("Objectives Overview", vec![body])
}

fn achievements_slide(dataset: &ReportDataset) -> Slide {
    let achievements = completed_key_results(&dataset.objectives, ACHIEVEMENT_LIMIT);

    let body = if achievements.is_empty() {
        Block::Placeholder(NO_ACHIEVEMENTS_PLACEHOLDER)
    } else {
        Block::Bullets(
            achievements
                .iter()
                .map(|key_result| key_result.title.clone())
                .collect(),
        )
    };

    Slide::content("Key Achievements", vec![body])
}

fn planning_slide(dataset: &ReportDataset) -> Slide {
    let focus = in_progress_objectives(&dataset.objectives, PLANNING_LIMIT);

    let body = if focus.is_empty() {
        Block::Placeholder(NO_PLANNING_PLACEHOLDER)
    } else {
        Block::Numbered(
            focus
                .iter()
                .map(|objective| {
                    format!(
                        "{} (currently {}%)",
                        objective.title,
                        progress_percent(objective.progress)
                    )
                })
                .collect(),
        )
    };

    Slide::content("Next Quarter Planning", vec![body])
}
