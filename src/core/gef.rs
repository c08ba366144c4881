//! Streaming GEF (Geotechnical Exchange Format) reader with lexical float parsing.
//!
//! Only the header records the plotter needs are interpreted
//! (`#COLUMN`, `#COLUMNINFO`, `#COLUMNVOID`, `#COLUMNSEPARATOR`,
//! `#RECORDSEPARATOR`, `#EOH`); every other record is kept verbatim.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::core::data::{ColumnInfo, Sample, SoundingLog};

// --- Error Handling ---
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseGefError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("header not terminated by #EOH")]
    MissingEndOfHeader,
    #[error("malformed #{keyword} record `{text}`")]
    BadHeader { keyword: &'static str, text: String },
    #[error("expected {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("invalid value '{text}' in column {column}")]
    BadFloat { column: usize, text: String },
}

impl ParseGefError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

// --- Parsed log ---
#[derive(Clone, Debug, Default)]
pub struct GefLog {
    columns: Vec<ColumnInfo>,
    voids: Vec<(usize, f64)>,
    header: Vec<(String, String)>,
    rows: Vec<Vec<Option<f64>>>,
}

impl GefLog {
    /// Parse GEF text held in memory.
    pub fn parse(text: &str) -> Result<Self, ParseGefError> {
        read_gef(text.as_bytes())
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// First value of an uninterpreted header record, e.g. `header("TESTID")`.
    #[must_use]
    pub fn header(&self, keyword: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(keyword))
            .map(|(_, v)| v.as_str())
    }

    fn void_of(&self, column: usize) -> Option<f64> {
        self.voids
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| *v)
    }
}

impl SoundingLog for GefLog {
    fn column_info(&self, column: usize) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.number == column)
    }

    fn data_iter(&self, column: usize, depth_column: usize) -> impl Iterator<Item = Sample> + '_ {
        self.rows.iter().filter_map(move |row| {
            let depth = (*row.get(depth_column.checked_sub(1)?)?)?;
            let value = column
                .checked_sub(1)
                .and_then(|i| row.get(i).copied().flatten());
            Some(Sample::new(depth, value))
        })
    }

    fn data(&self, column: usize, scan: usize) -> Option<f64> {
        let row = self.rows.get(scan.checked_sub(1)?)?;
        row.get(column.checked_sub(1)?).copied().flatten()
    }

    fn nr_scans(&self) -> usize {
        self.rows.len()
    }

    fn qn2column(&self, quantity: u32) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.quantity == Some(quantity))
            .map(|c| c.number)
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

fn fields(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).collect()
}

fn bad_header(line: usize, keyword: &'static str, text: &str) -> ParseGefError {
    ParseGefError::at(
        line,
        ParseErrorKind::BadHeader {
            keyword,
            text: text.to_owned(),
        },
    )
}

#[inline]
fn parse_value(bytes: &[u8], line: usize, column: usize) -> Result<f64, ParseGefError> {
    let bad = || {
        ParseGefError::at(
            line,
            ParseErrorKind::BadFloat {
                column,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        )
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

#[derive(Default)]
struct Layout {
    column_count: Option<usize>,
    column_sep: Option<u8>,
    record_sep: Option<u8>,
}

fn header_record(
    log: &mut GefLog,
    layout: &mut Layout,
    keyword: &str,
    value: &str,
    line: usize,
) -> Result<(), ParseGefError> {
    match keyword {
        "COLUMN" => {
            let n = lexical_core::parse::<usize>(value.as_bytes())
                .map_err(|_| bad_header(line, "COLUMN", value))?;
            layout.column_count = Some(n);
        }
        "COLUMNINFO" => {
            let f = fields(value);
            if f.len() < 3 {
                return Err(bad_header(line, "COLUMNINFO", value));
            }
            let number = lexical_core::parse::<usize>(f[0].as_bytes())
                .map_err(|_| bad_header(line, "COLUMNINFO", value))?;
            let quantity = f
                .get(3)
                .and_then(|q| lexical_core::parse::<u32>(q.as_bytes()).ok());
            log.columns.push(ColumnInfo {
                number,
                unit: f[1].to_owned(),
                name: f[2].to_owned(),
                quantity,
            });
        }
        "COLUMNVOID" => {
            let f = fields(value);
            let parsed = match f.as_slice() {
                [n, v, ..] => lexical_core::parse::<usize>(n.as_bytes())
                    .ok()
                    .zip(lexical_core::parse::<f64>(v.as_bytes()).ok()),
                _ => None,
            };
            let (number, void) = parsed.ok_or_else(|| bad_header(line, "COLUMNVOID", value))?;
            log.voids.push((number, void));
        }
        "COLUMNSEPARATOR" => layout.column_sep = value.bytes().next(),
        "RECORDSEPARATOR" => layout.record_sep = value.bytes().next(),
        _ => log.header.push((keyword.to_owned(), value.to_owned())),
    }
    Ok(())
}

fn data_record(
    log: &mut GefLog,
    layout: &Layout,
    mut buf: &[u8],
    line: usize,
) -> Result<(), ParseGefError> {
    buf = trim(buf);
    if let Some(rs) = layout.record_sep {
        if let [rest @ .., last] = buf {
            if *last == rs {
                buf = trim(rest);
            }
        }
    }
    if let Some(cs) = layout.column_sep {
        while let [rest @ .., last] = buf {
            if *last != cs {
                break;
            }
            buf = trim(rest);
        }
    }
    if buf.is_empty() {
        return Ok(());
    }

    let cells: Vec<&[u8]> = match layout.column_sep {
        Some(cs) if !cs.is_ascii_whitespace() => buf.split(|&b| b == cs).map(trim).collect(),
        _ => buf
            .split(u8::is_ascii_whitespace)
            .filter(|c| !c.is_empty())
            .collect(),
    };

    let expected = layout.column_count.unwrap_or(log.columns.len());
    if expected > 0 && cells.len() != expected {
        return Err(ParseGefError::at(
            line,
            ParseErrorKind::BadColumnCount {
                expected,
                got: cells.len(),
            },
        ));
    }

    let mut row = Vec::with_capacity(cells.len());
    for (i, cell) in cells.iter().enumerate() {
        let column = i + 1;
        let v = parse_value(cell, line, column)?;
        row.push(if log.void_of(column) == Some(v) { None } else { Some(v) });
    }
    log.rows.push(row);
    Ok(())
}

// --- GEF ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

pub fn read_gef<R: Read>(src: R) -> Result<GefLog, ParseGefError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut log = GefLog::default();
    let mut layout = Layout::default();
    let mut in_header = true;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseGefError::at(line_no, e.into()))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if !in_header {
            data_record(&mut log, &layout, &buf, line_no)?;
            continue;
        }

        let rec = trim(&buf);
        let Some(rec) = rec.strip_prefix(b"#") else {
            continue;
        };
        // GEF headers are frequently Latin-1; keep what decodes
        let rec = String::from_utf8_lossy(rec);
        let (keyword, value) = rec.split_once('=').unwrap_or((rec.as_ref(), ""));
        let keyword = keyword.trim().to_ascii_uppercase();
        if keyword == "EOH" {
            in_header = false;
            continue;
        }
        header_record(&mut log, &mut layout, &keyword, value.trim(), line_no)?;
    }

    if in_header {
        return Err(ParseGefError::at(line_no, ParseErrorKind::MissingEndOfHeader));
    }
    log.columns.sort_by_key(|c| c.number);
    Ok(log)
}

pub fn read_gef_from_path(path: impl AsRef<Path>) -> Result<GefLog, ParseGefError> {
    let file = File::open(path).map_err(|e| ParseGefError::at(0, e.into()))?;
    read_gef(file)
}
