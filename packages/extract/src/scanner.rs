//! Line-scanning state machine that delimits field blocks.
//!
//! The scanner consumes one line at a time. A start line opens a candidate
//! block; each following line must satisfy the next part of the block
//! grammar or the candidate is abandoned. An abandoned candidate never
//! consumes the line that broke it: that line is examined again as a
//! possible start, so blocks never overlap and are found top to bottom.

use twoddoc_catalog_models::{FieldCatalog, FieldRecord};

use crate::{Expectation, ExtractReport, SkippedCandidate, grammar, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingStart,
    ExpectMin,
    ExpectMax,
    ExpectType,
    ExpectDescription,
    InDescriptionContinuation,
}

/// Raw captures of the block being assembled.
#[derive(Debug, Default)]
struct PendingBlock<'a> {
    line: usize,
    id: &'a str,
    name: &'a str,
    min_size: &'a str,
    max_size: &'a str,
    value_type: &'a str,
    description: Vec<&'a str>,
}

impl PendingBlock<'_> {
    fn into_record(self) -> FieldRecord {
        FieldRecord {
            id: self.id.to_owned(),
            name: normalize::field(self.name),
            min_size: normalize::field(self.min_size),
            max_size: normalize::field(self.max_size),
            value_type: normalize::field(self.value_type),
            description: normalize::description(&self.description),
        }
    }
}

/// Incremental field block scanner.
///
/// [`crate::extract_with_report`] drives it over a whole string; callers
/// that already hold the lines can feed them directly and call
/// [`Scanner::finish`] at the end. Captured text is borrowed, so every fed
/// line must outlive the scanner.
#[derive(Debug)]
pub struct Scanner<'a> {
    state: State,
    block: PendingBlock<'a>,
    catalog: FieldCatalog,
    skipped: Vec<SkippedCandidate>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::SeekingStart,
            block: PendingBlock::default(),
            catalog: FieldCatalog::new(),
            skipped: Vec::new(),
        }
    }

    /// Feeds one line. `number` is the 1-based line number.
    pub fn feed(&mut self, number: usize, line: &'a str) {
        match self.state {
            State::SeekingStart => self.try_start(number, line),
            State::ExpectMin => match grammar::min_line(line) {
                Some(min_size) => {
                    self.block.min_size = min_size;
                    self.state = State::ExpectMax;
                }
                None => self.abandon(Expectation::MinSize, number, line),
            },
            State::ExpectMax => match grammar::max_line(line) {
                Some(max_size) => {
                    self.block.max_size = max_size;
                    self.state = State::ExpectType;
                }
                None => self.abandon(Expectation::MaxSize, number, line),
            },
            State::ExpectType => match grammar::type_line(line) {
                Some(value_type) => {
                    self.block.value_type = value_type;
                    self.state = State::ExpectDescription;
                }
                None => self.abandon(Expectation::ValueType, number, line),
            },
            State::ExpectDescription => match grammar::description_line(line) {
                Some(first) => {
                    self.block.description.push(first);
                    self.state = State::InDescriptionContinuation;
                }
                None => self.abandon(Expectation::Description, number, line),
            },
            State::InDescriptionContinuation => match grammar::continuation_line(line) {
                Some(fragment) => self.block.description.push(fragment),
                None => {
                    self.emit();
                    self.try_start(number, line);
                }
            },
        }
    }

    /// Closes the scan at end of input.
    #[must_use]
    pub fn finish(mut self) -> ExtractReport {
        match self.state {
            State::SeekingStart => {}
            State::InDescriptionContinuation => self.emit(),
            State::ExpectMin => self.skip(Expectation::MinSize),
            State::ExpectMax => self.skip(Expectation::MaxSize),
            State::ExpectType => self.skip(Expectation::ValueType),
            State::ExpectDescription => self.skip(Expectation::Description),
        }

        ExtractReport {
            catalog: self.catalog,
            skipped: self.skipped,
        }
    }

    fn try_start(&mut self, number: usize, line: &'a str) {
        if let Some((id, name)) = grammar::start_line(line) {
            self.block = PendingBlock {
                line: number,
                id,
                name,
                ..PendingBlock::default()
            };
            self.state = State::ExpectMin;
        } else {
            self.state = State::SeekingStart;
        }
    }

    fn abandon(&mut self, expected: Expectation, number: usize, line: &'a str) {
        self.skip(expected);
        self.try_start(number, line);
    }

    fn skip(&mut self, expected: Expectation) {
        let block = std::mem::take(&mut self.block);
        let candidate = SkippedCandidate {
            line: block.line,
            id: block.id.to_owned(),
            expected,
        };
        log::trace!("Skipping {candidate}");
        self.skipped.push(candidate);
        self.state = State::SeekingStart;
    }

    fn emit(&mut self) {
        let block = std::mem::take(&mut self.block);
        self.catalog.push(block.into_record());
        self.state = State::SeekingStart;
    }
}

impl Default for Scanner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feeds_lines_held_by_the_caller() {
        let lines: Vec<String> = [
            "AB   Sample Field",
            "     Taille Min.. 1",
            "     Taille Max.. 10",
            "     Type         Numeric",
            "     Description  first",
            "           second",
        ]
        .iter()
        .map(|line| (*line).to_owned())
        .collect();

        let mut scanner = Scanner::new();
        for (idx, line) in lines.iter().enumerate() {
            scanner.feed(idx + 1, line);
        }
        let report = scanner.finish();

        assert_eq!(report.catalog.len(), 1);
        assert_eq!(report.catalog.as_slice()[0].description, "first second");
        assert!(report.skipped.is_empty());
    }
}
