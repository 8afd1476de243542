// this_file: crates/iconfont-optimize/src/path.rs

//! Compact path data writer.

use iconfont_core::OptimizeError;
use svgtypes::{PathParser, PathSegment};

/// Round `value` to `precision` decimals and write it as short as possible:
/// no trailing zeros, no leading zero before the point, no negative zero.
pub fn format_number(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut s = format!("{:.*}", usize::from(precision), value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        return "0".to_string();
    }
    if let Some(rest) = s.strip_prefix("0.") {
        return format!(".{}", rest);
    }
    if let Some(rest) = s.strip_prefix("-0.") {
        return format!("-.{}", rest);
    }
    s
}

/// Rewrite path data with rounded numbers, minimal separators and implicit
/// command repetition.
pub fn minify_path(data: &str, precision: u8) -> Result<String, OptimizeError> {
    let mut writer = PathWriter::new(precision, data.len());

    for segment in PathParser::from(data) {
        let segment = segment.map_err(|e| OptimizeError::PathData {
            data: data.to_string(),
            message: e.to_string(),
        })?;

        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                writer.command(letter(abs, 'M'));
                writer.numbers(&[x, y]);
            },
            PathSegment::LineTo { abs, x, y } => {
                writer.command(letter(abs, 'L'));
                writer.numbers(&[x, y]);
            },
            PathSegment::HorizontalLineTo { abs, x } => {
                writer.command(letter(abs, 'H'));
                writer.numbers(&[x]);
            },
            PathSegment::VerticalLineTo { abs, y } => {
                writer.command(letter(abs, 'V'));
                writer.numbers(&[y]);
            },
            PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                writer.command(letter(abs, 'C'));
                writer.numbers(&[x1, y1, x2, y2, x, y]);
            },
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                writer.command(letter(abs, 'S'));
                writer.numbers(&[x2, y2, x, y]);
            },
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                writer.command(letter(abs, 'Q'));
                writer.numbers(&[x1, y1, x, y]);
            },
            PathSegment::SmoothQuadratic { abs, x, y } => {
                writer.command(letter(abs, 'T'));
                writer.numbers(&[x, y]);
            },
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                writer.command(letter(abs, 'A'));
                writer.numbers(&[rx, ry, x_axis_rotation]);
                writer.flag(large_arc);
                writer.flag(sweep);
                writer.numbers(&[x, y]);
            },
            PathSegment::ClosePath { abs } => {
                writer.command(letter(abs, 'Z'));
            },
        }
    }

    Ok(writer.finish())
}

fn letter(abs: bool, upper: char) -> char {
    if abs {
        upper
    } else {
        upper.to_ascii_lowercase()
    }
}

/// Command that an omitted letter would repeat after `previous`
fn implicit_after(previous: char) -> Option<char> {
    match previous {
        'M' => Some('L'),
        'm' => Some('l'),
        'Z' | 'z' => None,
        other => Some(other),
    }
}

struct PathWriter {
    out: String,
    precision: u8,
    previous_command: Option<char>,
    /// The last token written was a number (so the next one may need a separator)
    last_number: Option<String>,
}

impl PathWriter {
    fn new(precision: u8, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            precision,
            previous_command: None,
            last_number: None,
        }
    }

    fn command(&mut self, cmd: char) {
        let implicit = self.previous_command.and_then(implicit_after);
        if implicit != Some(cmd) {
            self.out.push(cmd);
            self.last_number = None;
        }
        self.previous_command = Some(cmd);
    }

    fn numbers(&mut self, values: &[f64]) {
        for &value in values {
            let token = format_number(value, self.precision);
            self.push_token(token);
        }
    }

    fn flag(&mut self, set: bool) {
        self.push_token(if set { "1" } else { "0" }.to_string());
    }

    fn push_token(&mut self, token: String) {
        if let Some(previous) = &self.last_number {
            let self_delimiting = token.starts_with('-')
                || (token.starts_with('.') && previous.contains('.'));
            if !self_delimiting {
                self.out.push(' ');
            }
        }
        self.out.push_str(&token);
        self.last_number = Some(token);
    }

    fn finish(self) -> String {
        self.out
    }
}
