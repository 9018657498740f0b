// Prompt construction. Everything here is pure string assembly so the
// exact text sent to the model can be asserted in tests.

/// Normalized user input for a single report run. Built once by the UI
/// and consumed once by `build_prompt`.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Either a service name ("Spotify") or a multi-line description.
    pub input_text: String,
    /// Selects which lead-in sentence the prompt uses.
    pub is_service_name: bool,
}

/// Instruction block appended verbatim to every prompt, regardless of
/// input mode. The section list is fixed; the model is told to answer
/// in Markdown so the result can be saved as a `.md` file as-is.
pub const SECTION_INSTRUCTIONS: &str = "\
Please include the following sections:
1. Brief History (founding year, milestones)
2. Target Audience (primary user segments)
3. Core Features (2-4 key functionalities)
4. Unique Selling Points (key differentiators)
5. Business Model (how the service makes money)
6. Tech Stack Insights (technologies used)
7. Perceived Strengths (standout features)
8. Perceived Weaknesses (limitations)

Format the response in Markdown.";

/// Assemble the full prompt for the completion API.
///
/// A service name is embedded in a one-sentence lead-in; a description
/// is passed through unmodified after a lead-in of its own. The section
/// instructions follow after a blank line in both modes.
pub fn build_prompt(request: &ReportRequest) -> String {
    let lead = if request.is_service_name {
        format!(
            "Generate a comprehensive analysis report about {} service.",
            request.input_text
        )
    } else {
        format!(
            "Generate a comprehensive analysis report about the following service:\n\n{}",
            request.input_text
        )
    };

    format!("{}\n\n{}", lead, SECTION_INSTRUCTIONS)
}
