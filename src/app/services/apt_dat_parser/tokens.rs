//! Whitespace field extraction for apt.dat lines
//!
//! apt.dat rows are positional: every field is addressed by its index in the
//! whitespace-split line. Names and cities contain spaces, so a field can also
//! be read as "the rest of the line starting at index".

/// Field view over one apt.dat line
///
/// Token boundaries are computed once; lookups borrow from the original line.
#[derive(Debug, Clone)]
pub struct LineFields<'a> {
    line: &'a str,
    spans: Vec<(usize, usize)>,
}

impl<'a> LineFields<'a> {
    /// Split a line on runs of whitespace
    pub fn new(line: &'a str) -> Self {
        let mut spans = Vec::new();
        let mut start = None;

        for (i, c) in line.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    spans.push((s, i));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            spans.push((s, line.len()));
        }

        Self { line, spans }
    }

    /// Number of fields on the line
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Field at `index`
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.spans.get(index).map(|&(start, end)| &self.line[start..end])
    }

    /// Remainder of the line starting at field `index`, internal spacing kept
    pub fn rest(&self, index: usize) -> Option<&'a str> {
        self.spans
            .get(index)
            .map(|&(start, _)| self.line[start..].trim_end())
    }

    /// Field at `index` parsed leniently as a float
    ///
    /// Missing or malformed text yields `0.0`.
    pub fn f64_at(&self, index: usize) -> f64 {
        self.get(index).map(parse_lenient_f64).unwrap_or(0.0)
    }

    /// Owned copy of the field at `index`, empty when absent
    pub fn string_at(&self, index: usize) -> String {
        self.get(index).unwrap_or_default().to_string()
    }
}

/// Parse base-10 floating point text, yielding `0.0` for anything malformed
///
/// Non-finite values ("nan", "inf") count as malformed.
pub fn parse_lenient_f64(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
