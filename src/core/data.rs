//! Sweep loader with zero-allocation float parsing.
//!
//! Accepts `freq, re, im` rows separated by commas or whitespace, which also
//! covers Touchstone `.s1p` files written in Hz/RI form.

use std::io::{BufRead, BufReader, Read};

use crate::core::sample::{Complex, Sample};

// --- Error Handling ---
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {kind}")]
pub struct ParseSweepError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(thiserror::Error, Debug)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("expected 3 columns, got {0}")]
    BadColumnCount(usize),
    #[error("invalid {field} value '{text}'")]
    BadFloat { field: &'static str, text: String },
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

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn is_separator(b: u8) -> bool {
    b == b',' || b == b';' || b.is_ascii_whitespace()
}

/// Split on commas/whitespace, collapsing runs. Writes at most `N` fields and
/// returns the total number seen.
fn split_fields<'a, const N: usize>(line: &'a [u8], out: &mut [&'a [u8]; N]) -> usize {
    let mut count = 0;
    for field in line.split(|&b| is_separator(b)).filter(|f| !f.is_empty()) {
        if count < N {
            out[count] = field;
        }
        count += 1;
    }
    count
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseSweepError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseSweepError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseSweepError {
            line,
            kind: ParseErrorKind::BadFloat {
                field,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        })
    }
}

// --- Fast ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read a whole sweep. A file without sample rows gives an empty sweep.
///
/// # Errors
/// `ParseSweepError` on I/O failure or malformed rows.
pub fn read_sweep<R: Read>(src: R) -> Result<Vec<Sample>, ParseSweepError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(128);
    let mut data = Vec::<Sample>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseSweepError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        // `!` starts a Touchstone comment anywhere on the line
        if let Some(bang) = buf.iter().position(|&b| b == b'!') {
            buf.truncate(bang);
        }
        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        // `#` is the Touchstone option line; we only read Hz/RI
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        let mut cols: [&[u8]; 3] = [&[]; 3];
        let count = split_fields(line, &mut cols);

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(cols[0]).is_err() {
                continue;
            }
        }

        if count != 3 {
            return Err(ParseSweepError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount(count),
            });
        }

        let freq = parse_f64(cols[0], line_no, "frequency")?;
        let re = parse_f64(cols[1], line_no, "real")?;
        let im = parse_f64(cols[2], line_no, "imaginary")?;
        data.push(Sample::new(freq, Complex::new(re, im)));
    }
    log::debug!("sweep ingest: {} samples from {line_no} lines", data.len());
    Ok(data)
}

/// # Errors
/// See [`read_sweep`]; opening the file can also fail.
pub fn read_sweep_from_path(path: &str) -> Result<Vec<Sample>, ParseSweepError> {
    if path == "-" {
        read_sweep(std::io::stdin())
    } else {
        use std::fs::File;
        read_sweep(File::open(path).map_err(|e| ParseSweepError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_csv_with_header() {
        let src = "freq,re,im\n1000000,0.1,-0.2\n2000000, 0.3 , 0.4\n";
        let data = read_sweep(src.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].freq_hz, 2e6);
        assert_eq!(data[1].gamma, Complex::new(0.3, 0.4));
    }

    #[test]
    fn reads_touchstone_ri() {
        let src = "! made by hand\n# Hz S RI R 50\n50000 0.9 \u{2212}0.1 ! first\n\n100000\t0.8\t-0.2\n";
        let data = read_sweep(src.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].gamma.im, -0.1);
        assert_eq!(data[1].freq_hz, 100_000.0);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = read_sweep("1,2\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(2)));
    }

    #[test]
    fn rejects_bad_float_after_header() {
        let err = read_sweep("f,re,im\n1,2,x\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFloat { field: "imaginary", .. }
        ));
    }

    #[test]
    fn header_only_input_is_an_empty_sweep() {
        assert!(read_sweep("# Hz S RI R 50\n".as_bytes()).unwrap().is_empty());
        assert!(read_sweep("freq,re,im\n".as_bytes()).unwrap().is_empty());
        assert!(read_sweep("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn error_message_names_the_line() {
        let err = read_sweep("1,2,3\n4,5\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected 3 columns, got 2");
    }
}
