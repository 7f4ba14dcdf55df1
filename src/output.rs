//! The two artifacts a benchmark run leaves behind: the rendered
//! frame as an uncompressed truecolor TGA, and a timing log that
//! accumulates one line per timed render across runs.  TGA was chosen
//! for the image because the whole format is an eighteen byte header
//! in front of raw pixel data; nothing has to be compressed or
//! round-tripped through an encoder to inspect a frame.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use failure::{Error, ResultExt};

use grid::PixelGrid;
use timing::TimingSample;

const TGA_HEADER_LEN: usize = 18;

/// Write the grid to `path` as a 24-bit uncompressed TGA.  Pixels are
/// streamed row-major from row zero, each as a blue, green, red byte
/// triple.  An existing file is truncated.
pub fn write_tga<P: AsRef<Path>>(path: P, grid: &PixelGrid) -> Result<(), Error> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|_| format!("could not create {}", path.display()))?;
    stream_tga(&mut BufWriter::new(file), grid)
        .with_context(|_| format!("could not write {}", path.display()))?;
    Ok(())
}

/// The encoder proper, split out so the byte stream can be inspected
/// without touching the filesystem.
fn stream_tga<W: Write>(out: &mut W, grid: &PixelGrid) -> Result<(), Error> {
    let (width, height) = (grid.width(), grid.height());
    ensure!(
        width <= usize::from(u16::max_value()) && height <= usize::from(u16::max_value()),
        "a {}x{} raster does not fit in a TGA header",
        width,
        height
    );

    let header: [u8; TGA_HEADER_LEN] = [
        0, // no image ID
        0, // no color map
        2, // uncompressed truecolor
        0, 0, 0, 0, 0, // empty color map specification
        0, 0, // X origin
        0, 0, // Y origin
        (width & 0xFF) as u8,
        (width >> 8) as u8,
        (height & 0xFF) as u8,
        (height >> 8) as u8,
        24, // bits per pixel
        0,  // no descriptor flags
    ];
    out.write_all(&header)?;

    for &pixel in grid.pixels() {
        let bgr = [
            (pixel & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            ((pixel >> 16) & 0xFF) as u8,
        ];
        out.write_all(&bgr)?;
    }
    out.flush()?;
    Ok(())
}

/// Append-only log of render timings, one `<milliseconds>,` line per
/// sample.  The file is created on first use and never truncated, so
/// successive benchmark runs accumulate into one history.
pub struct TimingLog {
    path: PathBuf,
    out: File,
}

impl TimingLog {
    /// Open the log at `path` for appending, creating it if absent.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<TimingLog, Error> {
        let path = path.as_ref().to_path_buf();
        let out = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .with_context(|_| format!("could not open timing log {}", path.display()))?;
        Ok(TimingLog { path, out })
    }

    /// Append one sample's elapsed milliseconds as its own line.
    pub fn record(&mut self, sample: TimingSample) -> Result<(), Error> {
        writeln!(self.out, "{},", sample.elapsed_ms)
            .with_context(|_| format!("could not append to {}", self.path.display()))?;
        Ok(())
    }
}
