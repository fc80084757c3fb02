
use std::collections::HashMap;

use kempe_common::message::{Messages, Span};
use kempe_common::{CapacityError, Driver, ProgramPoint, RegisterFile};
use log::{info, trace};

use crate::lex::{lex, Lexeme};

/// Everything the allocator needs: how many registers there are and which
/// variables are live at each point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Liveness {
    pub registers: RegisterFile,
    pub points: Vec<ProgramPoint>,
}

/// Parse liveness input, reporting any problems to the driver. Returns `None`
/// if an error was found.
pub fn parse(driver: &mut impl Driver, source: &str) -> Option<Liveness> {
    info!("parsing {} bytes of input", source.len());

    let mut parser = Parser::new();
    let liveness = parser.parse(source);

    trace!("done parsing");

    let failed = parser.msgs.has_errors();
    driver.report(parser.msgs);

    if failed {
        None
    } else {
        liveness
    }
}

/// The words of a single line, and where that line starts.
#[derive(Debug)]
struct Line<'src> {
    start: usize,
    words: Vec<(&'src str, Span)>,
}

impl<'src> Line<'src> {
    fn new(start: usize) -> Self {
        Self {
            start,
            words: Vec::new(),
        }
    }
}

struct Parser {
    msgs: Messages,
}

impl Parser {
    fn new() -> Self {
        Self {
            msgs: Messages::new(),
        }
    }

    fn parse(&mut self, source: &str) -> Option<Liveness> {
        let lines = split_lines(source);
        let mut lines = lines.into_iter();

        let registers = match lines.next() {
            Some(line) => self.capacity(line)?,
            None => {
                self.msgs.at(Span::at(0)).input_missing_capacity();
                return None;
            }
        };

        let points: Vec<_> = lines.map(|line| self.point(line)).collect();
        trace!("read {} program points", points.len());

        Some(Liveness { registers, points })
    }

    fn capacity(&mut self, line: Line) -> Option<RegisterFile> {
        let mut words = line.words.into_iter();

        let Some((text, span)) = words.next() else {
            self.msgs.at(Span::at(line.start)).input_missing_capacity();
            return None;
        };

        let rest: Option<Span> = words.map(|(_, span)| span).reduce(|a, b| a + b);
        if let Some(rest) = rest {
            self.msgs.at(rest).input_extra_capacity_tokens(span);
        }

        match RegisterFile::parse(text) {
            Ok(registers) => Some(registers),
            Err(CapacityError::NotAnInteger(text)) => {
                self.msgs.at(span).input_capacity_not_an_int(&text);
                None
            }
            Err(CapacityError::NotPositive(_) | CapacityError::Zero) => {
                self.msgs.at(span).input_capacity_not_positive();
                None
            }
            Err(CapacityError::OutOfRange(_)) => {
                self.msgs.at(span).input_capacity_out_of_range();
                None
            }
        }
    }

    fn point(&mut self, line: Line) -> ProgramPoint {
        let mut seen: HashMap<&str, Span> = HashMap::with_capacity(line.words.len());
        let mut point = ProgramPoint::new();

        for (word, span) in line.words {
            match seen.get(word) {
                Some(first) => self.msgs.at(span).input_repeated_variable(word, *first),
                None => {
                    seen.insert(word, span);
                }
            }

            point.add_live(word);
        }

        point
    }
}

/// Group the tokens of the source into lines. A line terminator at the very
/// end does not start another line.
fn split_lines(source: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::new(0);

    for (lexeme, span) in lex(source) {
        match lexeme {
            Lexeme::Word(word) => current.words.push((word, span)),
            Lexeme::Newline => {
                let next = Line::new(span.end);
                lines.push(std::mem::replace(&mut current, next));
            }
        }
    }

    if current.start < source.len() {
        lines.push(current);
    }

    lines
}
