use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Write;
use xcur_core::{DecodedImage, ImageSink};

#[derive(Serialize)]
struct ImageReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    image: &'a DecodedImage,
    pixel_sha256: String,
    rows: Vec<Vec<String>>,
}

/// Writes each decoded image as a pretty-printed JSON document.
pub struct JsonReportSink<W: Write> {
    writer: W,
    source: String,
}

impl<W: Write> JsonReportSink<W> {
    pub fn new(writer: W, source: impl Into<String>) -> Self {
        Self {
            writer,
            source: source.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ImageSink for JsonReportSink<W> {
    type Error = serde_json::Error;

    fn emit(&mut self, image: &DecodedImage) -> Result<(), Self::Error> {
        let report = ImageReport {
            source: &self.source,
            image,
            pixel_sha256: pixel_digest(&image.pixels),
            rows: image
                .rows()
                .map(|row| row.iter().map(|px| format!("0x{:08x}", px)).collect())
                .collect(),
        };

        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer).map_err(serde_json::Error::io)?;
        self.writer.flush().map_err(serde_json::Error::io)
    }
}

fn pixel_digest(pixels: &[u32]) -> String {
    let mut hasher = Sha256::new();
    for px in pixels {
        hasher.update(px.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}
