use std::{fs, process::exit};

use screendump::{render, DumpError};

/// Fixed paths, matching what the capture workflow expects: paste the console output into
/// `screenshot.txt`, run the tool, open `screenshot.png`.
const INPUT_PATH: &str = "screenshot.txt";
const OUTPUT_PATH: &str = "screenshot.png";

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        exit(1);
    }
}

fn run() -> Result<(), DumpError> {
    let dump = fs::read_to_string(INPUT_PATH)?;

    let canvas = render(&dump)?;
    canvas.save(OUTPUT_PATH)?;

    println!("All done.");

    Ok(())
}
