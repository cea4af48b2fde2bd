use std::{error::Error,
          f64::consts::PI,
          fs::File,
          io::{BufWriter, Write}};

fn main() -> Result<(), Box<dyn Error>> {
    // `leading` does not repeat the starting point of the closed curve.
    let pts = unit_steps::leading(12, |t| {
        let a = 2. * PI * t;
        [a.cos(), a.sin()]
    });
    let mut fh = BufWriter::new(File::create("/tmp/circle.dat")?);
    for [x, y] in &pts {
        writeln!(fh, "{:e} {:e}", x, y)?;
    }
    fh.flush()?;
    println!("Wrote {} points to /tmp/circle.dat.", pts.len());
    Ok(())
}
