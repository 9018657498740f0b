// Report persistence: filename derivation plus a single file write.
// The write takes the target directory as an argument so tests can
// point it at a temp directory; the binary passes the current dir.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stem used when the input yields no usable filename token.
const FALLBACK_STEM: &str = "untitled";

/// Derive the report filename from the user's input text.
///
/// Takes the first whitespace-delimited token, lowercases it, and keeps
/// only ASCII letters, digits, `-` and `_`. Dropping every other
/// character means path separators and dots can never leak into the
/// name, so input like `../etc passwd` produces `report_etc.md` rather
/// than a relative path. Empty or fully-stripped input falls back to
/// `report_untitled.md`.
pub fn derive_filename(input_text: &str) -> String {
    let token = input_text.split_whitespace().next().unwrap_or("");
    let stem: String = token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if stem.is_empty() {
        format!("report_{}.md", FALLBACK_STEM)
    } else {
        format!("report_{}.md", stem)
    }
}

/// Write the report verbatim to `<dir>/report_<stem>.md`, overwriting
/// any existing file, and return the path written.
pub fn save_report(dir: &Path, input_text: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(derive_filename(input_text));
    fs::write(&path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_first_token_lowercased() {
        assert_eq!(derive_filename("Spotify"), "report_spotify.md");
        assert_eq!(derive_filename("Apple Music clone"), "report_apple.md");
    }

    #[test]
    fn filename_falls_back_for_empty_input() {
        assert_eq!(derive_filename(""), "report_untitled.md");
        assert_eq!(derive_filename("   "), "report_untitled.md");
        assert_eq!(derive_filename("..."), "report_untitled.md");
    }

    #[test]
    fn filename_strips_path_characters() {
        assert_eq!(derive_filename("../etc passwd"), "report_etc.md");
        assert_eq!(derive_filename("my-service_2"), "report_my-service_2.md");
    }

    #[test]
    fn save_report_writes_verbatim_and_overwrites() {
        let dir = std::env::temp_dir().join("svcreport_output_test");
        fs::create_dir_all(&dir).unwrap();

        let path = save_report(&dir, "Spotify", "# First").unwrap();
        assert!(path.ends_with("report_spotify.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# First");

        // Second write to the same name silently replaces the first.
        save_report(&dir, "Spotify rocks", "# Second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Second");

        fs::remove_dir_all(&dir).ok();
    }
}
