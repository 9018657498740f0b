// Entrypoint for the CLI application.
// - Keeps `main` small: build the report client from the environment
//   and hand it to the interactive session.
// - Returns `anyhow::Result` to simplify error handling at the top.

use svcreport_cli::{api::ReportClient, ui::run};

fn main() -> anyhow::Result<()> {
    // Reads `OPENAI_API_KEY` (plus optional `OPENAI_BASE_URL` and
    // `OPENAI_MODEL` overrides), loading `.env` first if present.
    // See `api::ClientConfig::from_env`.
    let client = ReportClient::from_env()?;

    // Run the single prompt-and-print session. Blocks until the user
    // has their report (or an invalid menu choice ends the run early).
    run(client)
}
