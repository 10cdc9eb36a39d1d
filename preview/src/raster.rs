use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

/// Color used when a registry entry is not a parseable hex value.
pub const DEFAULT_RGB: [u8; 3] = [204, 204, 204];

/// Flat RGBA surface the preview sheet is composed on.
pub struct Sheet {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Sheet {
    pub fn new(width: u32, height: u32, bg: [u8; 3]) -> Self {
        let mut data = vec![255u8; (width * height * 4) as usize];
        for px in data.chunks_exact_mut(4) {
            px[0] = bg[0];
            px[1] = bg[1];
            px[2] = bg[2];
        }
        Sheet {
            width,
            height,
            data,
        }
    }

    /// Fill a rectangle, clipped to the sheet bounds. Coordinates may be
    /// negative or oversized; only the visible part is written.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, rgb: [u8; 3]) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x + w).clamp(0, self.width as i64) as u32;
        let y1 = (y + h).clamp(0, self.height as i64) as u32;
        for row in y0..y1 {
            for col in x0..x1 {
                let idx = ((row * self.width + col) * 4) as usize;
                self.data[idx] = rgb[0];
                self.data[idx + 1] = rgb[1];
                self.data[idx + 2] = rgb[2];
                self.data[idx + 3] = 255;
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * self.width + x) * 4) as usize;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// PNG output with a fixed filter and compression so identical inputs
    /// produce byte-identical files.
    pub fn save_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file = std::fs::File::create(path)?;
        let mut enc = Encoder::new(file, self.width, self.height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_filter(FilterType::NoFilter);
        enc.set_compression(Compression::Default);
        let mut writer = enc.write_header()?;
        writer.write_image_data(&self.data)?;
        Ok(())
    }
}

/// Parse a `#rrggbb` registry color; anything else gets the neutral default.
pub fn color_rgb(color: &str) -> [u8; 3] {
    let Some(hex) = color.strip_prefix('#') else {
        return DEFAULT_RGB;
    };
    if hex.len() != 6 {
        return DEFAULT_RGB;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => [r, g, b],
        _ => DEFAULT_RGB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_the_sheet() {
        let mut sheet = Sheet::new(4, 4, [0, 0, 0]);
        sheet.fill_rect(-2, -2, 3, 3, [255, 0, 0]);
        assert_eq!(sheet.pixel(0, 0), [255, 0, 0]);
        assert_eq!(sheet.pixel(1, 1), [0, 0, 0]);
        sheet.fill_rect(3, 3, 10, 10, [0, 255, 0]);
        assert_eq!(sheet.pixel(3, 3), [0, 255, 0]);
        assert_eq!(sheet.pixel(2, 3), [0, 0, 0]);
    }

    #[test]
    fn degenerate_rects_write_nothing() {
        let mut sheet = Sheet::new(2, 2, [9, 9, 9]);
        sheet.fill_rect(0, 0, 0, 5, [1, 2, 3]);
        sheet.fill_rect(0, 0, 5, -1, [1, 2, 3]);
        assert_eq!(sheet.pixel(0, 0), [9, 9, 9]);
    }

    #[test]
    fn hex_colors_parse_with_a_neutral_fallback() {
        assert_eq!(color_rgb("#ef4444"), [0xef, 0x44, 0x44]);
        assert_eq!(color_rgb("tomato"), DEFAULT_RGB);
        assert_eq!(color_rgb("#abc"), DEFAULT_RGB);
        assert_eq!(color_rgb("#zzzzzz"), DEFAULT_RGB);
    }
}
