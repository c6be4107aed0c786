use std::{fs::File, io::Write, path::Path};

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Writes outside the canvas are ignored, so callers never have to
    /// clip against the edges.
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let id = self.index(x, y);
        self.pixels[id] = new_color;
    }

    /// Fills every pixel from the given function. Pixels are independent,
    /// so the work is spread over rayon's thread pool; each worker writes
    /// disjoint cells of the buffer.
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: Option<indicatif::ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;

        let fill = |(id, pixel_color): (usize, &mut Color)| {
            let x = id % width;
            let y = id / width;
            *pixel_color = fun(x, y);
        };

        match progressbar {
            Some(pb) => self
                .pixels
                .par_iter_mut()
                .enumerate()
                .progress_with(pb)
                .for_each(fill),
            None => self.pixels.par_iter_mut().enumerate().for_each(fill),
        }
    }
}

/// Saving the image in the plain-text PPM format.
impl Canvas {
    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// One line per image row, top to bottom, `R G B` triplets per pixel.
    fn ppm_pixel_data(&self) -> String {
        let mut data = String::new();

        for row in self.pixels.chunks(self.width) {
            let line = row
                .iter()
                .flat_map(|color| color.as_scaled_values())
                .map(|val| val.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            data.push_str(&line);
            data.push('\n');
        }
        data
    }

    pub fn to_ppm(&self) -> String {
        self.ppm_header() + &self.ppm_pixel_data()
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.to_ppm().as_bytes())
    }
}
