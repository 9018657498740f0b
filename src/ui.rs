// UI layer: the interactive prompt-and-print session, built on
// `dialoguer` for input and `indicatif` for a spinner while the
// completion call is in flight. The flow is strictly linear: collect
// input, build the prompt, call the API once, display and save.

use crate::api::{ReportClient, ReportError};
use crate::output::save_report;
use crate::prompt::{build_prompt, ReportRequest};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// The two supported input modes, chosen from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    ServiceName,
    Description,
}

/// Map the typed menu line to an input mode. Anything other than "1"
/// or "2" (surrounding whitespace ignored) is an invalid choice.
fn parse_choice(raw: &str) -> Option<InputMode> {
    match raw.trim() {
        "1" => Some(InputMode::ServiceName),
        "2" => Some(InputMode::Description),
        _ => None,
    }
}

/// Render a failed completion call as the report text. The error string
/// is displayed and saved exactly like a successful report.
fn error_text(err: &ReportError) -> String {
    format!("Error generating report: {}", err)
}

/// Read description lines until the first empty line, joining them with
/// newlines. An immediate empty line yields an empty string.
fn read_description() -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        let line: String = Input::new().allow_empty(true).interact_text()?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Show the menu and collect a report request. Returns `None` on an
/// invalid menu choice, which ends the run without a report.
fn collect_request() -> Result<Option<ReportRequest>> {
    println!("Choose input type:");
    println!("1. Service name (e.g., \"Spotify\", \"Notion\")");
    println!("2. Service description (text)");
    println!();

    let choice: String = Input::new()
        .with_prompt("Enter your choice (1 or 2)")
        .interact_text()?;

    let request = match parse_choice(&choice) {
        Some(InputMode::ServiceName) => {
            let name: String = Input::new()
                .with_prompt("Enter service name")
                .allow_empty(true)
                .interact_text()?;
            ReportRequest {
                input_text: name,
                is_service_name: true,
            }
        }
        Some(InputMode::Description) => {
            println!();
            println!("Enter service description (finish with an empty line):");
            ReportRequest {
                input_text: read_description()?,
                is_service_name: false,
            }
        }
        None => {
            println!();
            println!(
                "{}",
                style("Invalid choice. Please run the program again.").red()
            );
            return Ok(None);
        }
    };

    Ok(Some(request))
}

/// Run one report-generation session end to end. Receives the client so
/// the caller controls where the configuration comes from.
pub fn run(client: ReportClient) -> Result<()> {
    println!(
        "{}",
        style("Service Analysis Report Generator").bold().cyan()
    );
    println!();

    let request = match collect_request()? {
        Some(request) => request,
        None => return Ok(()),
    };

    let prompt = build_prompt(&request);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Calling the completion API... this may take a minute");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.generate(&prompt);
    spinner.finish_and_clear();

    let report = match outcome {
        Ok(text) => {
            println!("{}", style("Report generated successfully.").green());
            text
        }
        Err(err) => {
            let text = error_text(&err);
            println!("{}", style(&text).red());
            text
        }
    };

    println!();
    println!("Report:");
    println!("{}", report);

    let path = save_report(Path::new("."), &request.input_text, &report)?;
    println!();
    println!(
        "{}",
        style(format!("Report saved to {}", path.display())).green()
    );

    Ok(())
}
