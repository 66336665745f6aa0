//! Path Command Parser
//!
//! Reads path mini-language text (`M`, `L`, `A`, `Z` with absolute coordinates)
//! and routes every emitted edge through the [`SegmentStore`] insertion
//! contract, so deduplication happens while parsing.
//!
//! Any other command letter is a defined no-op: its parameters are skipped and
//! parsing continues with the next command.

use crate::segment::{ArcShape, Segment};
use crate::segment_store::{InsertOutcome, SegmentStore};
use serde::Serialize;
use std::ops::AddAssign;
use svgcut_core::{parse_decimal, ParseError, Position};
use tracing::{debug, warn};

/// A single drawing command of the path mini-language
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Position),
    /// `L x y`
    LineTo(Position),
    /// `A rx ry rotation large-arc sweep x y`
    ArcTo { end: Position, shape: ArcShape },
    /// `Z`
    ClosePath,
    /// Any other command letter; emits nothing
    Unsupported(char),
}

/// Counters collected while parsing path data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    /// Segments handed to the store
    pub segments_offered: usize,
    /// Segments the store kept
    pub segments_stored: usize,
    /// Segments rejected as duplicates of a stored edge
    pub duplicates: usize,
    /// Zero-length segments rejected
    pub degenerate: usize,
    /// Unsupported commands skipped
    pub unsupported: usize,
}

impl ParseSummary {
    fn record(&mut self, outcome: InsertOutcome) {
        self.segments_offered += 1;
        match outcome {
            InsertOutcome::Stored(_) => self.segments_stored += 1,
            InsertOutcome::Duplicate => self.duplicates += 1,
            InsertOutcome::Degenerate => self.degenerate += 1,
        }
    }
}

impl AddAssign for ParseSummary {
    fn add_assign(&mut self, other: Self) {
        self.segments_offered += other.segments_offered;
        self.segments_stored += other.segments_stored;
        self.duplicates += other.duplicates;
        self.degenerate += other.degenerate;
        self.unsupported += other.unsupported;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Command(char),
    Number(&'a str),
}

/// Split path data into command letters and numeric tokens.
///
/// Whitespace and commas separate tokens. A letter always starts a new
/// command, except an `e`/`E` inside a number, which stays in the number token
/// (and is later rejected as a non-decimal).
fn tokenize(data: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in data.char_indices() {
        if ch.is_whitespace() || ch == ',' {
            if let Some(s) = start.take() {
                tokens.push(Token::Number(&data[s..idx]));
            }
        } else if ch.is_ascii_alphabetic() && !(matches!(ch, 'e' | 'E') && start.is_some()) {
            if let Some(s) = start.take() {
                tokens.push(Token::Number(&data[s..idx]));
            }
            tokens.push(Token::Command(ch));
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(s) = start {
        tokens.push(Token::Number(&data[s..]));
    }

    tokens
}

fn parse_flag(token: &str) -> Result<bool, ParseError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::InvalidFlag {
            token: token.to_string(),
        }),
    }
}

fn arity(command: char) -> Option<usize> {
    match command {
        'M' | 'L' => Some(2),
        'A' => Some(7),
        'Z' => Some(0),
        _ => None,
    }
}

fn decode(command: char, params: &[&str]) -> Result<PathCommand, ParseError> {
    Ok(match command {
        'M' => PathCommand::MoveTo(Position::parse(params[0], params[1])?),
        'L' => PathCommand::LineTo(Position::parse(params[0], params[1])?),
        'A' => PathCommand::ArcTo {
            shape: ArcShape {
                radius_x: parse_decimal(params[0])?,
                radius_y: parse_decimal(params[1])?,
                rotation: parse_decimal(params[2])?,
                large_arc: parse_flag(params[3])?,
                sweep: parse_flag(params[4])?,
            },
            end: Position::parse(params[5], params[6])?,
        },
        'Z' => PathCommand::ClosePath,
        other => PathCommand::Unsupported(other),
    })
}

/// Parse path data into its command sequence.
///
/// Parameters beyond one command's arity repeat the command; a repeated `M`
/// continues as `L`. A trailing partial parameter group is an error.
pub fn parse_commands(data: &str) -> Result<Vec<PathCommand>, ParseError> {
    let tokens = tokenize(data);
    let mut commands = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let (letter, params_start) = match tokens[i] {
            Token::Command(c) => (c, i + 1),
            // Numbers ahead of any command have nothing to belong to.
            Token::Number(token) => {
                warn!(token, "Skipping parameters without a command");
                while let Some(Token::Number(_)) = tokens.get(i) {
                    i += 1;
                }
                commands.push(PathCommand::Unsupported('?'));
                continue;
            }
        };

        let mut params_end = params_start;
        let mut params = Vec::new();
        while let Some(Token::Number(n)) = tokens.get(params_end) {
            params.push(*n);
            params_end += 1;
        }
        i = params_end;

        let Some(count) = arity(letter) else {
            debug!(command = %letter, skipped = params.len(), "Unsupported path command");
            commands.push(PathCommand::Unsupported(letter));
            continue;
        };

        if count == 0 {
            if !params.is_empty() {
                warn!(command = %letter, ignored = params.len(), "Ignoring parameters after close");
            }
            commands.push(decode(letter, &[])?);
            continue;
        }

        if params.is_empty() || params.len() % count != 0 {
            return Err(ParseError::MissingParameter {
                command: letter,
                expected: count,
                found: params.len() % count,
            });
        }

        for (n, group) in params.chunks(count).enumerate() {
            let repeated = if letter == 'M' && n > 0 { 'L' } else { letter };
            commands.push(decode(repeated, group)?);
        }
    }

    Ok(commands)
}

/// Running state of one path-data string
#[derive(Debug, Default)]
struct PathCursor {
    current: Option<Position>,
    start: Option<Position>,
}

impl PathCursor {
    fn apply(&mut self, command: PathCommand, store: &mut SegmentStore, summary: &mut ParseSummary) {
        match command {
            PathCommand::MoveTo(at) => {
                self.current = Some(at);
                self.start = Some(at);
            }
            PathCommand::LineTo(to) => {
                if let Some(from) = self.current {
                    summary.record(store.insert(Segment::line(from, to)));
                }
                self.current = Some(to);
            }
            PathCommand::ArcTo { end, shape } => {
                if let Some(from) = self.current {
                    summary.record(store.insert(Segment::arc(from, end, shape)));
                }
                self.current = Some(end);
            }
            PathCommand::ClosePath => {
                if let Some(start) = self.start {
                    if let Some(from) = self.current {
                        summary.record(store.insert(Segment::line(from, start)));
                    }
                    self.current = Some(start);
                }
            }
            PathCommand::Unsupported(_) => summary.unsupported += 1,
        }
    }
}

/// Parse one path-data string into the store.
///
/// The whole string is decoded before any segment is inserted, so a malformed
/// token leaves the store untouched.
pub fn parse_path_data(data: &str, store: &mut SegmentStore) -> Result<ParseSummary, ParseError> {
    let commands = parse_commands(data)?;
    let mut cursor = PathCursor::default();
    let mut summary = ParseSummary::default();

    for command in commands {
        cursor.apply(command, store, &mut summary);
    }

    debug!(
        stored = summary.segments_stored,
        duplicates = summary.duplicates,
        "Parsed path data"
    );

    Ok(summary)
}
