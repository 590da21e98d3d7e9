// File: src/classifier.rs
use crate::core::types::Model;
use crate::error::{GibberishError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// `true` when `line` scores above the model's threshold.
pub fn classify(line: &str, model: &Model) -> bool {
    model.classify(line)
}

/// Classifies every line of `reader` until end of input, writing `True` or
/// `False` per line to `writer`. Returns how many lines were classified.
pub fn classify_stream<R: BufRead, W: Write>(model: &Model, mut reader: R, mut writer: W) -> Result<usize> {
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8(std::mem::take(&mut buf)).map_err(|source| {
            GibberishError::Encoding { what: format!("input line {line_no}"), source }
        })?;

        let score = model.score(&line);
        let plausible = score > model.threshold();
        debug!(line_no, score, plausible, "classified line");

        writeln!(writer, "{}", if plausible { "True" } else { "False" })?;
        writer.flush()?;
    }

    Ok(line_no)
}
