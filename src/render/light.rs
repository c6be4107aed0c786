use crate::primitive::{point::Point, tuple::Tuple, vector::Vector};

use super::{color::Color, intersection::IntersecComputations, object::Object};

#[derive(Clone, Debug, PartialEq)]
pub struct PointLightSource {
    position: Point,
    intensity: Color,
}

impl Default for PointLightSource {
    fn default() -> Self {
        Self::new(Point::new(-10., 10., -10.), Color::white())
    }
}

impl PointLightSource {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    /// Phong shading of a single surface point. Shadowed points get the
    /// ambient term only; the diffuse and specular terms fade out as the
    /// light moves off the surface or away from the reflection.
    pub fn color_of_illuminated_point(
        &self,
        object: &Object,
        point: Point,
        eye_v: Vector,
        normal_v: Vector,
        in_shadow: bool,
    ) -> Color {
        let effective_color =
            object.material().color_at_object(object, point) * self.intensity;
        let ambient = effective_color * object.material().ambient();

        if in_shadow {
            return ambient;
        }

        let point_to_light = self.position - point;
        if point_to_light.magnitude() == 0. {
            // the light sits exactly on the point, direction is undefined
            return Color::black();
        }
        let light_v = point_to_light.normalize();

        let light_dot_normal = light_v.dot(normal_v);
        if light_dot_normal < 0. {
            return ambient;
        }

        let diffuse = effective_color * object.material().diffuse() * light_dot_normal;

        let reflect_v = (-light_v).reflect(normal_v);
        let reflect_dot_eye = reflect_v.dot(eye_v);

        let specular = if reflect_dot_eye <= 0. {
            Color::black()
        } else {
            self.intensity
                * object.material().specular()
                * reflect_dot_eye.powf(object.material().shininess())
        };

        ambient + diffuse + specular
    }
}

/// Schlick approximation of the Fresnel reflectance at a hit, the
/// fraction of light that reflects rather than refracts.
pub fn schlick_reflectance(comps: &IntersecComputations) -> f64 {
    let mut cos = comps.eye_v().dot(comps.normal_v());

    let n1 = comps.refractive_from();
    let n2 = comps.refractive_to();

    if n1 > n2 {
        let ratio = n1 / n2;
        let sin2_t = ratio.powi(2) * (1. - cos.powi(2));
        if sin2_t > 1. {
            // total internal reflection
            return 1.;
        }

        cos = (1. - sin2_t).sqrt();
    }

    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1. - r0) * (1. - cos).powi(5)
}
