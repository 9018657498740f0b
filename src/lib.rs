// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run one report-generation session.
//
// Module responsibilities:
// - `prompt`: Defines the report request and assembles the prompt sent
//   to the completion API. Pure string work, no I/O.
// - `api`: Encapsulates the blocking chat-completion call and the
//   configuration (API key, base URL, model) it needs.
// - `output`: Derives the report filename from the user's input and
//   writes the report to disk.
// - `ui`: Implements the terminal flows (menu, input collection, report
//   display) and wires the other modules together.
//
// Keeping this separation makes it easier to test the prompt and file
// logic directly and to swap the completion provider in the future.
pub mod api;
pub mod output;
pub mod prompt;
pub mod ui;
