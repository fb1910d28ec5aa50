//! Display functions for command results

use super::formatters::{
    PANEL_WIDTH, bottom_border, create_progress_bar, format_greens, format_greys, format_scored,
    format_yellows, pad_line, top_border, wrap_line,
};
use crate::commands::{DistributionResult, ScoreResult};
use crate::solver::Report;
use colored::{Color, Colorize};

const LIST_COLOR: Color = Color::TrueColor {
    r: 28,
    g: 134,
    b: 238,
};

/// Print a boxed panel; `lines` are plain text and coloured with `text_color`
fn print_panel(title: &str, lines: &[String], border: Color, text_color: Option<Color>) {
    println!("{}", top_border(title, PANEL_WIDTH).color(border));
    for line in lines.iter().flat_map(|line| wrap_line(line, PANEL_WIDTH)) {
        let padded = pad_line(&line, PANEL_WIDTH);
        let body = match text_color {
            Some(color) => padded.color(color).to_string(),
            None => padded,
        };
        println!("{} {body} {}", "│".color(border), "│".color(border));
    }
    println!("{}", bottom_border(PANEL_WIDTH).color(border));
}

fn list_panel(title: &str, description: &[&str], entries: &[String]) {
    let mut lines: Vec<String> = vec!["Words that:".to_string()];
    lines.extend(description.iter().map(|&d| d.to_string()));
    lines.extend(entries.iter().cloned());
    print_panel(title, &lines, LIST_COLOR, None);
}

/// Print the clues and the three ranked lists of a solve
pub fn print_report(report: &Report) {
    let constraints = &report.constraints;

    println!("\n{}", "═".repeat(PANEL_WIDTH + 4));
    println!(
        " {} ",
        "Wordle: Possible Solutions".bright_blue().bold()
    );
    println!("{}", "═".repeat(PANEL_WIDTH + 4));

    print_panel(
        "Green Letters",
        &[format_greens(&constraints.greens)],
        Color::Green,
        Some(Color::Green),
    );
    print_panel(
        "Yellow Letters",
        &[format_yellows(&constraints.yellows)],
        Color::Yellow,
        Some(Color::Yellow),
    );
    print_panel(
        "Grey Letters",
        &[format_greys(&constraints.greys)],
        Color::BrightBlack,
        Some(Color::BrightBlack),
    );

    println!();
    list_panel(
        "Top 10 Answers",
        &[
            " * Fit the given criteria",
            " * Scored the highest based on letter distributions of all five-letter words",
            "",
            "These are our best guesses based on statistics",
            "",
        ],
        &format_scored(&report.top),
    );
    println!();
    list_panel(
        "Top 10 Non-Repeating Letter Answers",
        &[
            " * Fit the given criteria",
            " * Scored the highest based on letter distributions of all five-letter words",
            " * Do not contain any repeated letters",
            "",
            "These are still valid guesses but also allow you to rule out/in more options if they are wrong",
            "",
        ],
        &format_scored(&report.non_repeating),
    );
    println!();
    list_panel(
        "Top 10 New Letter Answers",
        &[
            " * Do not fit the given criteria",
            " * Use only totally new letters",
            " * Scored the highest based on letter distributions of all five-letter words",
            "",
            "These words can be great if you're trying to get as much information as possible from the next turn",
            "",
        ],
        &format_scored(&report.new_letter),
    );
}

/// Print the score breakdown of a single word
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER SCORE:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} dictionary words:",
        result.dictionary_size
    );
    for (letter, points) in &result.terms {
        println!("   {letter}  {points:>6}");
    }
    println!(
        "   Total: {}",
        result.score.to_string().bright_yellow().bold()
    );
}

/// Print the per-letter counts of a dictionary
pub fn print_distribution_result(result: &DistributionResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER DISTRIBUTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📈 {} words", result.total_words);
    let max = result
        .distribution
        .iter()
        .map(|(_, count)| count)
        .max()
        .unwrap_or(0);
    for (letter, count) in result.distribution.iter() {
        let bar = create_progress_bar(count, max, 40);
        println!("   {letter}: {} {count:6}", bar.green());
    }
}
