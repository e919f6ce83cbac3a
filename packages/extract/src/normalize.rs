//! Whitespace normalization of captured fragments.

/// Trims a single-line capture.
#[must_use]
pub fn field(raw: &str) -> String {
    raw.trim().to_owned()
}

/// Joins description fragments into one line.
///
/// Line breaks between fragments become a single space and every run of
/// whitespace collapses to one space, with no leading or trailing space.
#[must_use]
pub fn description(fragments: &[&str]) -> String {
    let mut out = String::new();

    for word in fragments.iter().flat_map(|f| f.split_whitespace()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_single_line_fields() {
        assert_eq!(field("  Numeric \t"), "Numeric");
        assert_eq!(field(""), "");
    }

    #[test]
    fn joins_fragments_with_single_spaces() {
        assert_eq!(description(&["line one", "line two"]), "line one line two");
    }

    #[test]
    fn collapses_internal_runs() {
        assert_eq!(
            description(&["  Date   d'émission\tdu", "document.  "]),
            "Date d'émission du document."
        );
    }

    #[test]
    fn empty_fragments_vanish() {
        assert_eq!(description(&["first", "", "   ", "last"]), "first last");
        assert_eq!(description(&[]), "");
    }
}
