//! Text dataset format shared by all counting algorithms.
//!
//! Layout
//! ```text
//! points: 2
//! 1 1
//! 5 5
//! triangles: 1
//! 0 0 4 0 0 4
//! ```
//! - A header is `<label><sep><count>` with label `points` or `triangles`
//!   (case-insensitive, an optional leading `N ` is ignored) and sep `:` or `=`,
//!   so `N Points=2` is accepted as well.
//! - After a header come exactly `2 * count` (points) or `6 * count`
//!   (triangles) integers, split across lines in any way.
//!
//! Any deviation is a `ParseError`; there is no partial recovery.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::geom::{Point, Triangle};

/// Points and triangles read from one input file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub points: Vec<Point>,
    pub triangles: Vec<Triangle>,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    MissingHeader { expected: &'static str },
    BadHeader { text: String },
    BadInteger { token: String },
    CountMismatch { section: &'static str, expected: usize, found: usize },
    Io(io::Error),
}

/// Parse failure with the 1-based line where it was detected (0 for I/O).
#[derive(Debug)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingHeader { expected } => {
                write!(f, "line {}: expected `{expected}` header", self.line)
            }
            ParseErrorKind::BadHeader { text } => {
                write!(f, "line {}: malformed header `{text}`", self.line)
            }
            ParseErrorKind::BadInteger { token } => {
                write!(f, "line {}: not an integer: `{token}`", self.line)
            }
            ParseErrorKind::CountMismatch {
                section,
                expected,
                found,
            } => write!(
                f,
                "line {}: {section} section declares {expected} values, found {found}",
                self.line
            ),
            ParseErrorKind::Io(e) => write!(f, "read failed: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Split a header line into its lowercase label and declared count.
fn parse_header(line: &str) -> Option<(String, usize)> {
    let sep = line.rfind(|c: char| c == ':' || c == '=')?;
    let (label, count) = line.split_at(sep);
    let count = count[1..].trim().parse().ok()?;
    let label = label.trim().to_ascii_lowercase();
    let label = label.strip_prefix("n ").unwrap_or(&label).trim().to_string();
    Some((label, count))
}

const MAX_RESERVE: usize = 1 << 20;

/// Line-aware cursor over the non-empty lines of a dataset.
struct Lines<'a> {
    inner: std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate().peekable(),
            last: 0,
        }
    }

    fn skip_blank(&mut self) {
        while self.inner.next_if(|(_, l)| l.trim().is_empty()).is_some() {}
    }

    /// Read the `expected` header and return the number of integers it
    /// announces (`count * per_item`).
    fn header(&mut self, expected: &'static str, per_item: usize) -> Result<usize, ParseError> {
        self.skip_blank();
        let (no, line) = self.inner.next().ok_or_else(|| {
            ParseError::at(self.last + 1, ParseErrorKind::MissingHeader { expected })
        })?;
        self.last = no + 1;
        let bad_header = || {
            ParseError::at(
                no + 1,
                ParseErrorKind::BadHeader {
                    text: line.trim().to_string(),
                },
            )
        };
        match parse_header(line) {
            Some((label, n)) if label == expected => n.checked_mul(per_item).ok_or_else(bad_header),
            Some(_) => Err(ParseError::at(self.last, ParseErrorKind::MissingHeader { expected })),
            None => Err(bad_header()),
        }
    }

    /// Read exactly `n` integers, stopping before the next header line.
    fn integers(&mut self, section: &'static str, n: usize) -> Result<Vec<i64>, ParseError> {
        // The count comes from the file; only trust it up to a bounded reservation.
        let mut out = Vec::with_capacity(n.min(MAX_RESERVE));
        while out.len() < n {
            let Some((no, line)) = self.inner.next_if(|(_, l)| parse_header(l).is_none()) else {
                break;
            };
            self.last = no + 1;
            for token in line.split_whitespace() {
                let v = token.parse().map_err(|_| {
                    ParseError::at(
                        self.last,
                        ParseErrorKind::BadInteger {
                            token: token.to_string(),
                        },
                    )
                })?;
                out.push(v);
            }
        }
        if out.len() != n {
            return Err(ParseError::at(
                self.last,
                ParseErrorKind::CountMismatch {
                    section,
                    expected: n,
                    found: out.len(),
                },
            ));
        }
        Ok(out)
    }
}

impl Dataset {
    pub fn parse(text: &str) -> Result<Dataset, ParseError> {
        let mut lines = Lines::new(text);

        let n = lines.header("points", 2)?;
        let coords = lines.integers("points", n)?;
        let points = coords
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();

        let n = lines.header("triangles", 6)?;
        let coords = lines.integers("triangles", n)?;
        let triangles = coords
            .chunks_exact(6)
            .map(|c| {
                Triangle::new([
                    Point::new(c[0], c[1]),
                    Point::new(c[2], c[3]),
                    Point::new(c[4], c[5]),
                ])
            })
            .collect();

        lines.skip_blank();
        if let Some((no, line)) = lines.inner.next() {
            return Err(ParseError::at(
                no + 1,
                ParseErrorKind::BadHeader {
                    text: line.trim().to_string(),
                },
            ));
        }
        Ok(Dataset { points, triangles })
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Dataset, ParseError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ParseError::at(0, ParseErrorKind::Io(e)))?;
        Self::parse(&text)
    }

    /// Write in the canonical `points: N` / `triangles: N` layout.
    pub fn write<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "points: {}", self.points.len())?;
        for p in &self.points {
            writeln!(w, "{} {}", p.x, p.y)?;
        }
        writeln!(w, "triangles: {}", self.triangles.len())?;
        for t in &self.triangles {
            let [a, b, c] = t.vertices;
            writeln!(w, "{} {} {} {} {} {}", a.x, a.y, b.x, b.y, c.x, c.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generator_layout() {
        let text = "points: 2\n1 1\n5 5\ntriangles: 1\n0 0 4 0 0 4\n";
        let d = Dataset::parse(text).unwrap();
        assert_eq!(d.points, vec![Point::new(1, 1), Point::new(5, 5)]);
        assert_eq!(d.triangles, vec![Triangle::from([(0, 0), (4, 0), (0, 4)])]);
    }

    #[test]
    fn parses_equals_headers_and_free_line_breaks() {
        let text = "N Points=3\n1 2 3\n4\n-5 6\n\nN Triangles=1\n0 0\n4 0\n0 4\n\n";
        let d = Dataset::parse(text).unwrap();
        assert_eq!(d.points.len(), 3);
        assert_eq!(d.points[2], Point::new(-5, 6));
        assert_eq!(d.triangles.len(), 1);
    }

    #[test]
    fn empty_sections() {
        let d = Dataset::parse("points: 0\ntriangles: 0\n").unwrap();
        assert_eq!(d, Dataset::default());
    }

    #[test]
    fn count_mismatch_is_reported() {
        let err = Dataset::parse("points: 3\n1 1\n2 2\ntriangles: 0\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::CountMismatch {
                section: "points",
                expected: 6,
                found: 4
            }
        ));
        assert_eq!(err.line, 3);
    }

    #[test]
    fn bad_integer_and_headers() {
        let err = Dataset::parse("points: 1\n1 x\ntriangles: 0\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadInteger { ref token } if token == "x"));
        assert_eq!(err.line, 2);

        let err = Dataset::parse("triangles: 0\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::MissingHeader { expected: "points" }));

        let err = Dataset::parse("points: 0\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::MissingHeader { expected: "triangles" }));

        let err = Dataset::parse("points 4\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadHeader { .. }));

        let err = Dataset::parse("points: 0\ntriangles: 0\n7 7\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadHeader { .. }));
        assert_eq!(err.line, 3);
    }

    #[test]
    fn oversized_counts_are_parse_errors() {
        // 2 * count still fits in usize: rejected once the data runs out.
        let err = Dataset::parse("points: 4611686018427387904\n1 1\ntriangles: 0\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::CountMismatch {
                section: "points",
                found: 2,
                ..
            }
        ));

        // 2 * count and 6 * count overflow usize.
        let err = Dataset::parse("points: 9223372036854775808\ntriangles: 0\n").unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::BadHeader { ref text } if text == "points: 9223372036854775808")
        );
        assert_eq!(err.line, 1);

        let err = Dataset::parse("points: 0\ntriangles: 3074457345618258603\n").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadHeader { .. }));
        assert_eq!(err.line, 2);
    }

    #[test]
    fn write_then_parse_preserves_dataset() {
        let d = Dataset {
            points: vec![Point::new(-3, 7), Point::new(0, 0)],
            triangles: vec![Triangle::from([(1, 2), (3, -4), (-5, 6)])],
        };
        let mut buf = Vec::new();
        d.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("points: 2\n"));
        assert_eq!(Dataset::parse(&text).unwrap(), d);
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let err = Dataset::read("/nonexistent/trisweep/input.txt").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
