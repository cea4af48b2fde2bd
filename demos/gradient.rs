use std::{error::Error,
          fs::File,
          io::{BufWriter, Write}};
use rgb::RGB8;
use unit_steps::array;

/// Linear blend of `c0` and `c1` at `t` ∈ \[0, 1\].
fn mix(c0: RGB8, c1: RGB8, t: f64) -> RGB8 {
    let m = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)).round() as u8;
    RGB8::new(m(c0.r, c1.r), m(c0.g, c1.g), m(c0.b, c1.b))
}

fn main() -> Result<(), Box<dyn Error>> {
    let blue = RGB8::new(31, 119, 180);
    let orange = RGB8::new(255, 127, 14);
    // One color per cell, sampled at the middle of the cell.
    let cells = array::midpoints(16, |t| mix(blue, orange, t));
    let mut fh = BufWriter::new(File::create("/tmp/gradient.ppm")?);
    writeln!(fh, "P3\n{} 1\n255", cells.len())?;
    for RGB8 { r, g, b } in cells.iter() {
        writeln!(fh, "{} {} {}", r, g, b)?;
    }
    fh.flush()?;
    println!("Wrote /tmp/gradient.ppm ({} cells).", cells.len());
    Ok(())
}
