//! Line grammar of a field block.
//!
//! Each function tests one physical line (without its line terminator)
//! against one part of the block layout produced by `pdftotext -layout`:
//!
//! ```text
//! 10   Nom du champ
//!      Taille Min.. 0
//!      Taille Max.. 38
//!      Type         Alphanumérique
//!      Description  Première ligne de la description,
//!            suite de la description.
//! ```
//!
//! Indentation widths are exact: a line indented by N means N whitespace
//! characters followed by either the end of the line or a non-whitespace
//! character. Labels are matched literally.

/// Indentation of the identifier-to-name gap on a start line.
pub const NAME_GAP: usize = 3;

/// Indentation of the `Taille Min`/`Taille Max`/`Type`/`Description` lines.
pub const HEADER_INDENT: usize = 5;

/// Indentation of a description continuation line.
pub const CONTINUATION_INDENT: usize = 11;

/// Number of separator characters between a size label and its value.
const SIZE_SEPARATOR_LEN: usize = 2;

const MIN_LABEL: &str = "Taille Min";
const MAX_LABEL: &str = "Taille Max";
const TYPE_LABEL: &str = "Type";
const DESCRIPTION_LABEL: &str = "Description";

/// Strips exactly `width` leading whitespace characters from `line`.
///
/// Returns `None` if the line has fewer than `width` leading whitespace
/// characters or more than `width`.
#[must_use]
pub fn indented_exactly(line: &str, width: usize) -> Option<&str> {
    let mut chars = line.char_indices();

    for _ in 0..width {
        let (_, c) = chars.next()?;
        if !c.is_whitespace() {
            return None;
        }
    }

    match chars.next() {
        None => Some(""),
        Some((_, c)) if c.is_whitespace() => None,
        Some((idx, _)) => Some(&line[idx..]),
    }
}

/// Matches the first line of a block: a two-character alphanumeric id at
/// column 0, exactly three whitespace characters, then the name.
///
/// Returns `(id, name)` with the name untrimmed.
#[must_use]
pub fn start_line(line: &str) -> Option<(&str, &str)> {
    let mut chars = line.char_indices();

    for _ in 0..2 {
        let (_, c) = chars.next()?;
        if !c.is_alphanumeric() {
            return None;
        }
    }

    let id_end = chars.next().map_or(line.len(), |(idx, _)| idx);
    let name = indented_exactly(&line[id_end..], NAME_GAP)?;

    Some((&line[..id_end], name))
}

/// Matches the `Taille Min` line and returns the raw minimum-size text.
#[must_use]
pub fn min_line(line: &str) -> Option<&str> {
    size_line(line, MIN_LABEL)
}

/// Matches the `Taille Max` line and returns the raw maximum-size text.
#[must_use]
pub fn max_line(line: &str) -> Option<&str> {
    size_line(line, MAX_LABEL)
}

/// Matches the `Type` line and returns the raw type text.
#[must_use]
pub fn type_line(line: &str) -> Option<&str> {
    spaced_label_line(line, TYPE_LABEL)
}

/// Matches the `Description` line and returns the first description
/// fragment.
#[must_use]
pub fn description_line(line: &str) -> Option<&str> {
    spaced_label_line(line, DESCRIPTION_LABEL)
}

/// Matches a description continuation line and returns its content.
#[must_use]
pub fn continuation_line(line: &str) -> Option<&str> {
    indented_exactly(line, CONTINUATION_INDENT)
}

/// `<indent>Label??value`, where `??` is any two characters.
fn size_line<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = indented_exactly(line, HEADER_INDENT)?.strip_prefix(label)?;

    let mut chars = rest.chars();
    for _ in 0..SIZE_SEPARATOR_LEN {
        chars.next()?;
    }

    Some(chars.as_str())
}

/// `<indent>Label<whitespace+>value`.
fn spaced_label_line<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = indented_exactly(line, HEADER_INDENT)?.strip_prefix(label)?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_is_exact() {
        assert_eq!(indented_exactly("     Type", 5), Some("Type"));
        assert_eq!(indented_exactly("    Type", 5), None);
        assert_eq!(indented_exactly("      Type", 5), None);
        assert_eq!(indented_exactly("     ", 5), Some(""));
        assert_eq!(indented_exactly("", 5), None);
    }

    #[test]
    fn tabs_count_as_whitespace() {
        assert_eq!(indented_exactly("\t\t\tx", 3), Some("x"));
    }

    #[test]
    fn start_line_splits_id_and_name() {
        assert_eq!(start_line("AB   Sample Field"), Some(("AB", "Sample Field")));
        assert_eq!(start_line("10   Adresse ligne 1"), Some(("10", "Adresse ligne 1")));
        assert_eq!(start_line("AB   "), Some(("AB", "")));
    }

    #[test]
    fn start_line_rejects_wrong_gap_or_id() {
        assert_eq!(start_line("AB  Sample"), None);
        assert_eq!(start_line("AB    Sample"), None);
        assert_eq!(start_line("ABC   Sample"), None);
        assert_eq!(start_line(" AB   Sample"), None);
        assert_eq!(start_line("A-   Sample"), None);
        assert_eq!(start_line("AB"), None);
    }

    #[test]
    fn start_line_accepts_non_ascii_alphanumerics() {
        assert_eq!(start_line("É1   Champ"), Some(("É1", "Champ")));
    }

    #[test]
    fn size_lines_skip_two_separator_characters() {
        assert_eq!(min_line("     Taille Min.. 1"), Some(" 1"));
        assert_eq!(max_line("     Taille Max.. 10"), Some(" 10"));
        assert_eq!(max_line("     Taille Max : variable"), Some(" variable"));
        assert_eq!(min_line("     Taille Min."), None);
        assert_eq!(min_line("     Taille Max.. 1"), None);
        assert_eq!(min_line("      Taille Min.. 1"), None);
    }

    #[test]
    fn type_and_description_need_whitespace_after_label() {
        assert_eq!(type_line("     Type         Numeric"), Some("Numeric"));
        assert_eq!(type_line("     Types        Numeric"), None);
        assert_eq!(type_line("     Type"), None);
        assert_eq!(
            description_line("     Description  A short field."),
            Some("A short field.")
        );
        assert_eq!(description_line("     Description:  A short field."), None);
    }

    #[test]
    fn labels_match_literally() {
        assert_eq!(min_line("     taille Min.. 1"), None);
        assert_eq!(description_line("     DESCRIPTION  x"), None);
    }

    #[test]
    fn continuation_requires_eleven_columns() {
        assert_eq!(continuation_line("           line two"), Some("line two"));
        assert_eq!(continuation_line("          line two"), None);
        assert_eq!(continuation_line("            line two"), None);
        assert_eq!(continuation_line(""), None);
    }
}
