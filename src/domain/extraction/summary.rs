use super::ExtractionRule;

/// Takes the first meaningful line of the description.
///
/// Blank lines and HTML comments (pull-request templates leave these behind)
/// are skipped. Leading heading markers and list bullets are stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRule;

impl ExtractionRule for SummaryRule {
    fn extract(&self, description: &str) -> Option<String> {
        let visible = strip_html_comments(description);
        visible.lines().map(clean_line).find(|line| !line.is_empty())
    }
}

fn strip_html_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            // Unterminated comment hides the remainder.
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

fn clean_line(line: &str) -> String {
    let mut line = line.trim();

    let hashes = line.chars().take_while(|c| *c == '#').count();
    let after_hashes = &line[hashes..];
    if hashes > 0 && (after_hashes.is_empty() || after_hashes.starts_with(char::is_whitespace)) {
        line = after_hashes.trim_start();
    }

    // Rules and underlines (`---`, `===`) carry no text.
    if line.chars().all(|c| matches!(c, '-' | '=' | '*' | '_' | '+')) {
        return String::new();
    }

    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            line = rest.trim_start();
            break;
        }
    }

    line.to_string()
}
