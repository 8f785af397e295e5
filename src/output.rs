use crate::constants::SUCCESS_LABEL;
use crate::error::AnalyzeError;
use crate::vision::VisionResult;
use colored::{ColoredString, Colorize};
use std::fmt::Display;

fn labelled(label: ColoredString, body: impl Display) -> String {
    format!("{} {}", label, body)
}

/// `paint` colors the label only; the response text is printed as received.
pub fn render_success(result: &VisionResult, paint: bool) -> String {
    let label = if paint {
        SUCCESS_LABEL.bold().green()
    } else {
        SUCCESS_LABEL.normal()
    };
    labelled(label, result.render())
}

pub fn render_error(error: &AnalyzeError, paint: bool) -> String {
    match error.stage_label() {
        Some(label) if paint => labelled(label.bold().red(), error),
        Some(label) => labelled(label.normal(), error),
        None => error.to_string(),
    }
}

// Errors go to stdout too, one message per run.
pub fn print_outcome(outcome: &Result<VisionResult, AnalyzeError>) {
    match outcome {
        Ok(result) => println!("{}", render_success(result, true)),
        Err(error) => println!("{}", render_error(error, true)),
    }
}
