// src/handlers/console.rs
// DOCUMENTATION: Interactive console front-end
// PURPOSE: Prompt for the search inputs and print the run summary

use crate::services::{RunOutcome, RunStats};
use std::io::{self, BufRead, Write};

// --- ANSI colors for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Keyword and city typed by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub city: String,
}

/// Print a label and read one line, without its line ending
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask for keyword, then city
pub fn read_search_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<SearchRequest> {
    let keyword = prompt_line(input, output, "Enter a keyword (e.g., HVAC services): ")?;
    let city = prompt_line(input, output, "Enter a city name (e.g., Miami): ")?;
    Ok(SearchRequest { keyword, city })
}

/// Ask for keyword and city; a read failure is logged and ends the run
pub fn prompt_search_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Option<SearchRequest> {
    match read_search_request(input, output) {
        Ok(request) => Some(request),
        Err(e) => {
            log::error!("Could not read search input: {}", e);
            None
        }
    }
}

/// Human-readable result lines for a finished run
pub fn render_summary(stats: &RunStats) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(coords) = stats.coordinates {
        lines.push(format!("{}Coordinates of {}: {}{}", CYAN, stats.city, coords, RESET));
        lines.push(format!(
            "Found {} places for '{}' in {}.",
            stats.places_found, stats.keyword, stats.city
        ));
    }

    match &stats.outcome {
        RunOutcome::CoordinatesNotFound => {
            lines.push(format!("{}Failed to retrieve city coordinates.{}", RED, RESET));
        }
        RunOutcome::NothingToSave => {
            lines.push(format!("{}No detailed place data to save.{}", YELLOW, RESET));
        }
        RunOutcome::Saved { path, rows } => {
            lines.push(format!(
                "{}Data saved to {} ({} rows){}",
                GREEN,
                path.display(),
                rows,
                RESET
            ));
        }
        RunOutcome::ExportFailed { error } => {
            lines.push(format!("{}Could not save data: {}{}", RED, error, RESET));
        }
    }

    if !stats.errors.is_empty() {
        lines.push(format!(
            "{}{} warnings ({}).{}",
            YELLOW,
            stats.errors.len(),
            stats.errors.join("; "),
            RESET
        ));
    }

    lines.push(format!(
        "{}API requests: {}, duration: {}s{}",
        BOLD, stats.api_requests, stats.duration_seconds, RESET
    ));

    lines
}

pub fn print_summary(stats: &RunStats) {
    for line in render_summary(stats) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_reads_keyword_then_city() {
        let mut input = Cursor::new("coffee shop\r\nReno\n");
        let mut output = Vec::new();

        let request = read_search_request(&mut input, &mut output).unwrap();

        assert_eq!(
            request,
            SearchRequest {
                keyword: "coffee shop".to_string(),
                city: "Reno".to_string(),
            }
        );
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Enter a keyword"));
        assert!(shown.contains("Enter a city name"));
    }

    #[test]
    fn test_closed_input_gives_empty_strings() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let request = read_search_request(&mut input, &mut output).unwrap();
        assert_eq!(request.keyword, "");
        assert_eq!(request.city, "");
    }

    #[test]
    fn test_non_utf8_input_is_an_error() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n', b'R', b'\n']);
        let mut output = Vec::new();

        let err = read_search_request(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_prompt_failure_ends_run_softly() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n', b'R', b'\n']);
        let mut output = Vec::new();

        assert_eq!(prompt_search_request(&mut input, &mut output), None);

        let mut input = Cursor::new("bar\nReno\n");
        let request = prompt_search_request(&mut input, &mut output).unwrap();
        assert_eq!(request.city, "Reno");
    }

    #[test]
    fn test_summary_for_saved_run() {
        let mut stats = RunStats::new("Reno", "coffee shop");
        stats.coordinates = Some(Coordinates::new(39.53, -119.81));
        stats.places_found = 2;
        stats.complete(
            RunOutcome::Saved {
                path: PathBuf::from("Reno_coffee_shop_places.xlsx"),
                rows: 2,
            },
            3,
        );

        let text = render_summary(&stats).join("\n");
        assert!(text.contains("Coordinates of Reno: (39.53, -119.81)"));
        assert!(text.contains("Found 2 places for 'coffee shop' in Reno."));
        assert!(text.contains("Data saved to Reno_coffee_shop_places.xlsx (2 rows)"));
    }

    #[test]
    fn test_summary_for_unknown_city() {
        let mut stats = RunStats::new("Atlantis", "bar");
        stats.complete(RunOutcome::CoordinatesNotFound, 0);

        let text = render_summary(&stats).join("\n");
        assert!(text.contains("Failed to retrieve city coordinates."));
        assert!(!text.contains("Found"));
    }
}
