use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary PPM, one `#` header comment per entry of
/// `comments`. An existing file is replaced.
pub fn write_ppm(buffer: &PixelBuffer, comments: &[String], filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filepath)?);

    encode_ppm(buffer, comments, &mut file)?;
    file.flush()
}

pub fn encode_ppm(buffer: &PixelBuffer, comments: &[String], out: &mut impl Write) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    for comment in comments {
        for line in comment.lines() {
            writeln!(out, "# {}", line)?;
        }
    }
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())?;

    Ok(())
}
