use indicatif::{ProgressBar, ProgressStyle};

use crate::primitive::{matrix::Matrix, point::Point, tuple::Tuple};

use super::{canvas::Canvas, ray::Ray, world::World};

/// Maps the world onto a canvas of the target size through a one-unit
/// deep view frustum. `pixel_size`, `half_width` and `half_height` are
/// derived from the size and field of view and kept in sync by the
/// setters.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    field_of_view: f64,
    transformation: Matrix,
    inverse_transformation: Matrix,
    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Self {
        Self::with_transformation(
            target_width,
            target_height,
            field_of_view,
            Matrix::identity(),
        )
    }

    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        transformation: Matrix,
    ) -> Self {
        let mut camera = Self {
            target_width,
            target_height,
            field_of_view,
            inverse_transformation: Matrix::identity(),
            transformation: Matrix::identity(),
            pixel_size: 0.,
            half_width: 0.,
            half_height: 0.,
        };

        camera.compute_pixel_size();
        camera.set_transformation(transformation);
        camera
    }

    /// The canvas spans the full horizontal field of view one unit in
    /// front of the camera; pixels are square, so the shorter dimension
    /// just covers less of the view.
    fn compute_pixel_size(&mut self) {
        let half_view = (self.field_of_view / 2.).tan();
        let aspect = self.target_width as f64 / self.target_height as f64;

        if aspect >= 1. {
            self.half_width = half_view;
            self.half_height = half_view / aspect;
        } else {
            self.half_width = half_view * aspect;
            self.half_height = half_view;
        }

        self.pixel_size = self.half_width * 2. / self.target_width as f64;
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn set_field_of_view(&mut self, field_of_view: f64) {
        self.field_of_view = field_of_view;
        self.compute_pixel_size();
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn set_transformation(&mut self, transformation: Matrix) {
        self.inverse_transformation = transformation
            .inverse()
            .expect("camera transformation must be invertible");
        self.transformation = transformation;
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Ray from the camera through the center of the given pixel.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let x_offset = (x as f64 + 0.5) * self.pixel_size;
        let y_offset = (y as f64 + 0.5) * self.pixel_size;

        // canvas x grows right, world x grows left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel =
            self.inverse_transformation * Point::new(world_x, world_y, -1.);
        let origin = self.inverse_transformation * Point::zero();
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }

    pub fn render(&self, world: &World) -> Canvas {
        self.render_canvas(world, None)
    }

    pub fn render_with_progress(&self, world: &World) -> Canvas {
        let pixel_count = self.target_width * self.target_height;
        let progress_bar = ProgressBar::new(pixel_count as u64);
        progress_bar.set_style(
            ProgressStyle::with_template(
                "{wide_bar} rendered {percent}% of pixels in {elapsed} (eta: {eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        self.render_canvas(world, Some(progress_bar))
    }

    fn render_canvas(&self, world: &World, progress_bar: Option<ProgressBar>) -> Canvas {
        let mut canvas = Canvas::new(self.target_width, self.target_height);

        canvas.set_each_pixel(
            |x, y| world.color_at(self.ray_for_pixel(x, y)),
            progress_bar,
        );

        canvas
    }
}
