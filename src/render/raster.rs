use image::{GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};

use super::{Canvas, QUIET_ZONE};
use crate::error::RenderError;
use crate::generator::SymbolMatrix;

/// Largest accepted module size in pixels.
pub const MAX_PIXEL: u32 = 1024;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn fill<P>(image: &mut ImageBuffer<P, Vec<u8>>, x: u32, y: u32, cell: u32, color: P)
where
    P: image::Pixel<Subpixel = u8>,
{
    let x_end = (x + cell).min(image.width());
    let y_end = (y + cell).min(image.height());
    for px in x..x_end {
        for py in y..y_end {
            image.put_pixel(px, py, color);
        }
    }
}

impl Canvas for RgbaImage {
    fn fill_cell(&mut self, x: u32, y: u32, cell_size: u32, dark: bool) {
        fill(self, x, y, cell_size, if dark { BLACK } else { WHITE });
    }
}

impl Canvas for GrayImage {
    fn fill_cell(&mut self, x: u32, y: u32, cell_size: u32, dark: bool) {
        fill(self, x, y, cell_size, Luma([if dark { 0 } else { 255 }]));
    }
}

/// Side length in pixels of the rendered image.
fn image_size(matrix: &SymbolMatrix, pixel: u32) -> Result<u32, RenderError> {
    if !(1..=MAX_PIXEL).contains(&pixel) {
        return Err(RenderError::InvalidPixelSize {
            pixel,
            max: MAX_PIXEL,
        });
    }

    matrix
        .bordered_size()
        .checked_mul(pixel)
        .ok_or(RenderError::InvalidPixelSize {
            pixel,
            max: MAX_PIXEL,
        })
}

/// RGBA image of `matrix` with `pixel`-sized modules and a white quiet zone.
pub fn render(matrix: &SymbolMatrix, pixel: u32) -> Result<RgbaImage, RenderError> {
    let img_size = image_size(matrix, pixel)?;
    let mut image = ImageBuffer::from_pixel(img_size, img_size, WHITE);
    matrix.draw(&mut image, (QUIET_ZONE * pixel, QUIET_ZONE * pixel), pixel);
    Ok(image)
}

pub fn render_gray(matrix: &SymbolMatrix, pixel: u32) -> Result<GrayImage, RenderError> {
    let img_size = image_size(matrix, pixel)?;
    let mut image = ImageBuffer::from_pixel(img_size, img_size, Luma([255]));
    matrix.draw(&mut image, (QUIET_ZONE * pixel, QUIET_ZONE * pixel), pixel);
    Ok(image)
}
