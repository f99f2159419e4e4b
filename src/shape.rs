use crate::ray::Ray;
use crate::rgb::RGB;
use crate::*;

// below this the quadratic's leading coefficient is treated as degenerate
const DIR_EPS: f32 = 1e-8;

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: P3,
    pub radius: f32,
    pub albedo: RGB,
}

impl Sphere {
    pub fn new(center: P3, radius: f32, albedo: RGB) -> Self {
        Sphere {
            center,
            radius,
            albedo,
        }
    }

    /// Distance along `ray` to the near intersection, or `None` on a miss.
    ///
    /// Only the near root of the quadratic is computed. A ray whose origin
    /// lies inside the sphere therefore gets a negative distance rather
    /// than the exit point. The direction need not be normalized; its
    /// length scales the returned distance.
    pub fn near_hit(&self, ray: &Ray) -> Option<f32> {
        if self.radius <= 0.0 {
            return None;
        }
        let origin = ray.origin - self.center;

        let a = ray.dir.dot(&ray.dir);
        if a < DIR_EPS {
            return None;
        }
        let b = 2.0 * origin.dot(&ray.dir);
        let c = origin.dot(&origin) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        Some((-b - discriminant.sqrt()) / (2.0 * a))
    }
}
