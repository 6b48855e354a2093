use std::path::Path;

use image::{GrayImage, ImageReader};
use rqrr::PreparedImage;
use tracing::{debug, warn};

use crate::error::ScanError;
use crate::generator::SymbolMatrix;
use crate::render::raster::render_gray;

/// Module size used when rasterising a matrix for verification.
const SCAN_PIXEL: u32 = 8;

/// Reads symbols back with `rqrr`.
#[derive(Debug, Default)]
pub struct Scanner;

impl Scanner {
    pub fn scan_path(path: &Path) -> Result<Vec<Vec<u8>>, ScanError> {
        let img = ImageReader::open(path)?.decode()?.to_luma8();
        Self::scan_image(img)
    }

    /// Raw payload bytes of every symbol found in `img`. Fails if none can be
    /// decoded.
    pub fn scan_image(img: GrayImage) -> Result<Vec<Vec<u8>>, ScanError> {
        let mut prep_img = PreparedImage::prepare(img);
        let grids = prep_img.detect_grids();

        if grids.is_empty() {
            return Err(ScanError::NotFound);
        }

        let mut contents = Vec::new();
        let mut last_err = None;
        for grid in grids {
            let mut content = Vec::new();
            match grid.decode_to(&mut content) {
                Ok(meta) => {
                    debug!(
                        version = meta.version.0,
                        mask = meta.mask,
                        len = content.len(),
                        "decoded grid"
                    );
                    contents.push(content);
                }
                Err(e) => {
                    warn!(error = ?e, "grid could not be decoded");
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) if contents.is_empty() => Err(ScanError::Decode {
                reason: format!("{e:?}"),
            }),
            _ => Ok(contents),
        }
    }

    pub fn scan_symbol(matrix: &SymbolMatrix) -> Result<Vec<Vec<u8>>, ScanError> {
        Self::scan_image(render_gray(matrix, SCAN_PIXEL)?)
    }
}
