/// Parses a free-text generation response into individual statements.
///
/// Strips list numbering and bullet markers, skips comment lines starting
/// with `#`, and drops empty lines.
#[must_use]
pub fn parse_response(response: &str) -> Vec<String> {
    let mut statements = Vec::new();
    for line in response.lines() {
        let mut line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Leading "12." style numbering.
        if let Some(dot) = line.find('.') {
            if line[..dot].chars().all(|c| c.is_ascii_digit()) && dot > 0 {
                line = line[dot + 1..].trim();
            }
        }
        let line = line.trim_start_matches(['-', '*', ' ']).trim();
        if !line.is_empty() {
            statements.push(line.to_string());
        }
    }
    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numbering_and_bullets() {
        let response = "1. The system shall log in the member.\n- The system shall issue books.\n* The system shall send reminders.";
        let parsed = parse_response(response);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], "The system shall log in the member.");
        assert_eq!(parsed[1], "The system shall issue books.");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let response = "# header\n\nThe system shall respond.\n\n";
        let parsed = parse_response(response);
        assert_eq!(parsed, vec!["The system shall respond."]);
    }
}
