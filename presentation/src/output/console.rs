//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use nexus_application::{DetailView, OperationState, SearchSnapshot};
use nexus_domain::{PRESET_QUESTIONS, Project, SUGGESTED_QUERIES};

const BAR_WIDTH: usize = 20;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One project as a compact card
    pub fn card(project: &Project) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("[{}]", project.id).dimmed(),
            project.title.bold()
        ));
        output.push_str(&format!(
            "    {} | {}\n",
            project.category.as_str().cyan(),
            Self::researcher_line(project)
        ));
        output.push_str(&format!("    {}\n", project.brief));
        output.push_str(&format!(
            "    {} {} of {} ({} backers)\n",
            Self::funding_bar(project.percent_funded()),
            format_usd(project.funding_raised).green(),
            format_usd(project.funding_goal),
            project.backers_count
        ));

        output
    }

    fn researcher_line(project: &Project) -> String {
        let researcher = &project.researcher;
        let line = format!("{}, {}", researcher.name, researcher.institution);
        if researcher.verified {
            format!("{} {}", line, "(verified)".green())
        } else {
            line
        }
    }

    pub fn funding_bar(percent: f64) -> String {
        let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!(
            "[{}{}] {:>3.0}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            percent
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn search(&self, snapshot: &SearchSnapshot, projects: &[&Project]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Search:".cyan().bold(), snapshot.query));
        output.push_str(&format!("{}\n", snapshot.message.italic()));
        if snapshot.intent_source.is_fallback() {
            output.push_str(&format!(
                "{}\n",
                "(AI assistant offline, matched with local rules)".dimmed()
            ));
        }
        output.push('\n');

        for project in projects {
            output.push_str(&Self::card(project));
            output.push('\n');
        }

        output.push_str(&format!(
            "{}\n",
            format!("{} project(s)", projects.len()).dimmed()
        ));
        output
    }

    fn detail(&self, project: &Project, view: &DetailView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&project.title));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Category:".cyan().bold(),
            project.category.as_str()
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Researcher:".cyan().bold(),
            Self::researcher_line(project),
            project.researcher.title
        ));
        output.push_str(&format!(
            "{} {} {} of {}\n",
            "Funding:".cyan().bold(),
            Self::funding_bar(project.percent_funded()),
            format_usd(project.funding_raised),
            format_usd(project.funding_goal)
        ));
        output.push_str(&format!(
            "{} {}/{} completed\n",
            "Milestones:".cyan().bold(),
            project.milestones_completed,
            project.total_milestones
        ));
        if let Some(impact) = &project.impact_statement {
            output.push_str(&format!("{} {}\n", "Impact:".cyan().bold(), impact));
        }
        if !project.budget_breakdown.is_empty() {
            output.push_str(&format!("{}\n", "Budget:".cyan().bold()));
            for item in &project.budget_breakdown {
                output.push_str(&format!(
                    "  {:<24} {:>12}\n",
                    item.category,
                    format_usd(item.amount)
                ));
            }
        }

        if let Some(text) = view.displayed_text() {
            output.push_str(&Self::section_header(view.audience.label()));
            output.push_str(&format!("\n{}\n", text));
            if matches!(view.content, OperationState::Failed { .. }) {
                output.push_str(&format!(
                    "\n{}\n",
                    "(AI summary unavailable, showing the project brief)".dimmed()
                ));
            }
        }

        if let Some(exchange) = view.qa.value() {
            output.push_str(&Self::section_header("Ask the Research"));
            output.push_str(&format!("\n{} {}\n", "Q:".bold(), exchange.question));
            output.push_str(&format!(
                "{}\n",
                Self::indent(&exchange.answer, "   ").trim_start()
            ));
        }

        output
    }

    fn projects(&self, projects: &[Project]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Featured Projects"));
        output.push_str("\n\n");
        for project in projects {
            output.push_str(&Self::card(project));
            output.push('\n');
        }
        output
    }

    fn suggestions(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Try searching for:".cyan().bold()));
        for query in SUGGESTED_QUERIES {
            output.push_str(&format!("  * {}\n", query));
        }

        output.push_str(&format!("\n{}\n", "Questions to ask a project:".cyan().bold()));
        for (index, question) in PRESET_QUESTIONS.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", index + 1, question));
        }

        output
    }
}

/// Whole-dollar amount with thousands separators
pub fn format_usd(amount: f64) -> String {
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
