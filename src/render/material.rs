use crate::primitive::point::Point;

use super::{color::Color, object::Object, pattern::Pattern};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pattern: Pattern,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
    reflectivity: f64,
    transparency: f64,
    refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            pattern: Pattern::Const(Color::white()),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            reflectivity: 0.,
            transparency: 0.,
            refractive_index: 1.,
        }
    }
}

impl Material {
    pub fn with_pattern(pattern: Pattern) -> Self {
        Self {
            pattern,
            ..Default::default()
        }
    }

    pub fn with_color(color: Color) -> Self {
        Self::with_pattern(Pattern::Const(color))
    }

    /// Dull surface with barely visible specular highlights.
    pub fn matte_with_color(color: Color) -> Self {
        Self {
            pattern: Pattern::Const(color),
            specular: 0.05,
            shininess: 15.,
            ..Default::default()
        }
    }

    pub fn glass() -> Self {
        Self {
            pattern: Pattern::Const(Color::black()),
            ambient: 0.025,
            diffuse: 0.2,
            specular: 1.,
            shininess: 300.,
            reflectivity: 0.9,
            transparency: 0.9,
            refractive_index: 1.5,
        }
    }

    pub fn mirror() -> Self {
        Self {
            pattern: Pattern::Const(Color::black()),
            ambient: 0.,
            diffuse: 0.1,
            specular: 1.,
            shininess: 400.,
            reflectivity: 1.,
            ..Default::default()
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    pub fn specular(&self) -> f64 {
        self.specular
    }

    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    pub fn transparency(&self) -> f64 {
        self.transparency
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    pub fn set_color(&mut self, color: Color) {
        self.pattern = Pattern::Const(color);
    }

    /// The Phong coefficients are only meaningful when nonnegative, so
    /// negative values are ignored and the current value kept.
    pub fn set_ambient(&mut self, ambient: f64) {
        if ambient >= 0. {
            self.ambient = ambient;
        }
    }

    pub fn set_diffuse(&mut self, diffuse: f64) {
        if diffuse >= 0. {
            self.diffuse = diffuse;
        }
    }

    pub fn set_specular(&mut self, specular: f64) {
        if specular >= 0. {
            self.specular = specular;
        }
    }

    pub fn set_shininess(&mut self, shininess: f64) {
        if shininess >= 0. {
            self.shininess = shininess;
        }
    }

    pub fn set_reflectivity(&mut self, reflectivity: f64) {
        self.reflectivity = reflectivity;
    }

    pub fn set_transparency(&mut self, transparency: f64) {
        self.transparency = transparency;
    }

    pub fn set_refractive_index(&mut self, refractive_index: f64) {
        self.refractive_index = refractive_index;
    }

    pub fn color_at(&self, point: &Point) -> Color {
        self.pattern.color_at(point)
    }

    pub fn color_at_object(&self, object: &Object, point: Point) -> Color {
        self.pattern.color_at_object(object, point)
    }
}
