use rayon::prelude::*;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{StampError, StampResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8};

/// Single-channel opacity buffer (`0` transparent, `255` opaque), row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// Fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel, one rayon task per row.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> u8 + Sync,
    {
        let mut mask = Self::new(width, height);
        mask.update_rows(|x, y, _| f(x, y));
        mask
    }

    /// Replace every pixel with `f(x, y, current)`, one rayon task per row.
    pub fn update_rows<F>(&mut self, f: F)
    where
        F: Fn(u32, u32, u8) -> u8 + Sync,
    {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        self.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, v) in row.iter_mut().enumerate() {
                    *v = f(x as u32, y as u32, *v);
                }
            });
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at `(x, y)`; out-of-bounds reads are transparent.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// RGBA8 raster with premultiplied alpha, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Source paint for [`masked_fill`].
#[derive(Clone, Copy, Debug)]
pub enum Fill<'a> {
    /// One color over the whole canvas.
    Solid(Rgba8),
    /// Pixels of an existing surface of the same size.
    Surface(&'a Surface),
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Surface filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.to_premul();
        let mut out = Self::new(width, height);
        for d in out.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
        out
    }

    /// Wrap premultiplied bytes.
    pub fn from_premul_bytes(width: u32, height: u32, data: Vec<u8>) -> StampResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| StampError::validation("surface size overflow"))?;
        if data.len() != expected {
            return Err(StampError::validation(format!(
                "surface byte len mismatch: expected {expected}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert a straight-alpha image into a premultiplied surface.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert back to a straight-alpha image for encoding.
    pub fn to_rgba_image(&self) -> StampResult<image::RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| StampError::validation("surface buffer does not match its dimensions"))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied pixel at `(x, y)`; out-of-bounds reads are transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Source-over `src` onto `self`.
    pub fn over_in_place(&mut self, src: &Surface) -> StampResult<()> {
        if self.width != src.width || self.height != src.height {
            return Err(StampError::validation(format!(
                "over expects equal-size surfaces, got {}x{} and {}x{}",
                self.width, self.height, src.width, src.height
            )));
        }
        premul_over_in_place(&mut self.data, &src.data)
    }

    /// New surface holding `src` composited over `self`.
    pub fn over(&self, src: &Surface) -> StampResult<Surface> {
        let mut out = self.clone();
        out.over_in_place(src)?;
        Ok(out)
    }
}

/// Paint `fill` through `mask` onto a transparent canvas of the mask's size.
///
/// Every premultiplied channel is scaled by the mask value, so a mask value of `m` yields the
/// fill at `m / 255` opacity without darkening its color.
pub fn masked_fill(fill: Fill<'_>, mask: &Mask) -> StampResult<Surface> {
    let (w, h) = (mask.width(), mask.height());
    let mut out = match fill {
        Fill::Solid(color) => Surface::solid(w, h, color),
        Fill::Surface(src) => {
            if src.width != w || src.height != h {
                return Err(StampError::validation(format!(
                    "masked_fill expects a {w}x{h} surface, got {}x{}",
                    src.width, src.height
                )));
            }
            src.clone()
        }
    };
    for (d, &m) in out.data.chunks_exact_mut(4).zip(mask.as_bytes()) {
        match m {
            255 => {}
            0 => d.fill(0),
            _ => {
                for c in d.iter_mut() {
                    *c = mul_div255_u8(u16::from(*c), u16::from(m));
                }
            }
        }
    }
    Ok(out)
}

pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> StampResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StampError::validation(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        d[3] = add_sat_u8(s[3], mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            let dc = mul_div255_u8(u16::from(d[c]), inv);
            d[c] = add_sat_u8(s[c], dc);
        }
    }
    Ok(())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        match a {
            0 => px[..3].fill(0),
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
