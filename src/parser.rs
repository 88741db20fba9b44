use std::ops::Range;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, u32 as decimal},
    combinator::{all_consuming, map_res},
    sequence::separated_pair,
    Finish, IResult,
};

use crate::{canvas::Canvas, color::Color8, error::DumpError};

/// Start-of-data sentinel. Data begins on the line after it.
pub const BEGIN_MARKER: &str = "###BEGIN";

/// End-of-data sentinel.
pub const END_MARKER: &str = "###END";

/// One run descriptor: `count` consecutive pixels of the same packed colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub count: u32,
    pub color: Color8,
}

/// One decoded data line: `#<x0>,<y0>,<n>,<count>:<color8>,...` - a horizontal strip of runs
/// starting at `(x0, y0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLine {
    /// 1-based line number in the dump, for diagnostics.
    pub line: usize,
    pub x0: i32,
    pub y0: i32,

    /// The run count the dump claims this line has. The analyzer always writes it, but nothing
    /// ever checks it against the actual number of runs - redundant, not an invariant.
    pub declared_count: i32,

    pub runs: Vec<Run>,
}

/// Finds the data region: every line strictly between the `###BEGIN` and `###END` sentinels.
/// Lines outside it (capture metadata, console noise) are ignored. An empty region is fine and
/// just means a background-only image.
pub fn locate_data_region(lines: &[&str]) -> Result<Range<usize>, DumpError> {
    let begin = lines
        .iter()
        .position(|line| line.trim().starts_with(BEGIN_MARKER))
        .ok_or(DumpError::MissingBeginMarker)?;

    let first = begin + 1;

    let end = lines[first..]
        .iter()
        .position(|line| line.trim().starts_with(END_MARKER))
        .map(|offset| first + offset)
        .ok_or(DumpError::MissingEndMarker)?;

    Ok(first..end)
}

impl DataLine {
    /// Decodes one (trimmed) data line. `line` is the 1-based line number, only used in
    /// diagnostics.
    pub fn parse(line: usize, text: &str) -> Result<DataLine, DumpError> {
        let rest = text
            .strip_prefix('#')
            .ok_or_else(|| DumpError::InvalidLinePrefix {
                line,
                content: text.to_string(),
            })?;

        let mut tokens = rest.split(',');

        let x0 = parse_coordinate(line, tokens.next())?;
        let y0 = parse_coordinate(line, tokens.next())?;

        let declared = tokens.next().unwrap_or("");
        let declared_count =
            declared
                .parse()
                .map_err(|_| DumpError::InvalidRunDescriptor {
                    line,
                    token: declared.to_string(),
                })?;

        let runs = tokens
            .map(|token| parse_run(line, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DataLine {
            line,
            x0,
            y0,
            declared_count,
            runs,
        })
    }

    /// Expands the runs onto the canvas, left to right, advancing the cursor one pixel per
    /// write. Painting outside the raster aborts the run - a dump that does that is broken, and
    /// clipping it silently would hide exactly the kind of bug this tool exists to show.
    pub fn paint(&self, canvas: &mut Canvas) -> Result<(), DumpError> {
        let mut x = self.x0;

        for run in &self.runs {
            for _ in 0..run.count {
                if !Canvas::contains(x, self.y0) {
                    return Err(DumpError::PixelOutOfBounds {
                        line: self.line,
                        x,
                        y: self.y0,
                    });
                }

                canvas.put_pixel(x as u32, self.y0 as u32, run.color);
                x += 1;
            }
        }

        Ok(())
    }
}

fn parse_coordinate(line: usize, token: Option<&str>) -> Result<i32, DumpError> {
    let token = token.unwrap_or("");

    token.parse().map_err(|_| DumpError::InvalidCoordinate {
        line,
        token: token.to_string(),
    })
}

fn parse_run(line: usize, token: &str) -> Result<Run, DumpError> {
    all_consuming(run_descriptor)(token)
        .finish()
        .map(|(_, run)| run)
        .map_err(|_: nom::error::Error<&str>| DumpError::InvalidRunDescriptor {
            line,
            token: token.to_string(),
        })
}

fn run_descriptor(input: &str) -> IResult<&str, Run> {
    let (rest, (count, color)) = separated_pair(decimal, char(':'), hex_byte)(input)?;

    Ok((rest, Run { count, color }))
}

fn hex_byte(input: &str) -> IResult<&str, Color8> {
    map_res(
        take_while_m_n(1, 2, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u8::from_str_radix(digits, 16).map(Color8),
    )(input)
}
