//! Renders a screenshot dump captured from the stepper analyzer's debug console as a png.
//!
//! The analyzer can't ship a frame over its serial console as raw pixels, so it prints a
//! run-length-encoded text dump instead: a `###BEGIN` line, then one line per horizontal strip
//! (`#<x0>,<y0>,<n>,<count>:<color8>,...`), then a `###END` line. Anything outside the sentinels
//! is console noise and gets ignored. This crate decodes that dump onto a 480x320 canvas and the
//! bundled binary writes it out as `screenshot.png`.
//!
//! Decoding is strictly fail-fast: a single malformed line aborts the whole run before any output
//! is written, since a half-decoded screenshot is worse than none when you're debugging the
//! analyzer itself.

pub mod canvas;
pub mod color;
pub mod error;
pub mod parser;

pub use canvas::Canvas;
pub use color::Color8;
pub use error::DumpError;
pub use parser::{locate_data_region, DataLine, Run};

/// Decodes a whole dump into a painted [Canvas]. Progress goes to stdout, one line per data
/// line, so a hang points straight at the offending line.
pub fn render(dump: &str) -> Result<Canvas, DumpError> {
    let lines: Vec<&str> = dump.lines().collect();
    let region = locate_data_region(&lines)?;

    let mut canvas = Canvas::new();

    for index in region {
        println!("Processing line {}", index + 1);

        let data_line = DataLine::parse(index + 1, lines[index].trim())?;
        data_line.paint(&mut canvas)?;
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    const BACKGROUND: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn renders_a_small_dump() {
        let dump = "\
capture from analyzer build 114
###BEGIN
#10,20,3,2:FF,1:00
###END
trailing noise
";

        let canvas = render(dump).unwrap();

        assert_eq!(canvas.pixel(10, 20), Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(11, 20), Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(12, 20), Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(13, 20), BACKGROUND);
    }

    #[test]
    fn empty_region_renders_the_bare_background() {
        let canvas = render("###BEGIN\n###END\n").unwrap();

        assert_eq!(canvas, Canvas::new());
    }

    #[test]
    fn dump_without_begin_fails() {
        let dump = "#10,20,1,1:FF\n###END\n";

        assert!(matches!(render(dump), Err(DumpError::MissingBeginMarker)));
    }

    #[test]
    fn dump_without_end_fails() {
        let dump = "###BEGIN\n#10,20,1,1:FF\n";

        assert!(matches!(render(dump), Err(DumpError::MissingEndMarker)));
    }

    #[test]
    fn malformed_data_line_aborts_the_render() {
        let dump = "###BEGIN\n#0,0,1,1:FF\nnot a data line\n###END\n";

        assert!(matches!(
            render(dump),
            Err(DumpError::InvalidLinePrefix { line: 3, .. })
        ));
    }

    #[test]
    fn disjoint_lines_render_order_independently() {
        let forward = "###BEGIN\n#0,0,1,2:E0\n#0,1,1,2:1C\n###END\n";
        let reversed = "###BEGIN\n#0,1,1,2:1C\n#0,0,1,2:E0\n###END\n";

        assert_eq!(render(forward).unwrap(), render(reversed).unwrap());
    }
}
