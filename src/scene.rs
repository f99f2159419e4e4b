use crate::ray::Ray;
use crate::shape::Sphere;

/// Ordered sphere collection. Read-only for the duration of a render;
/// no spatial index, intersection scans every sphere.
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Scene { spheres }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Nearest hit across all spheres in insertion order. The strict
    /// comparison keeps the earlier sphere on exactly equal distances.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&Sphere, f32)> {
        let mut nearest = None::<(&Sphere, f32)>;
        for sphere in self.spheres.iter() {
            if let Some(dist) = sphere.near_hit(ray) {
                if nearest.map_or(true, |(_, best)| dist < best) {
                    nearest = Some((sphere, dist));
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb::RGB;
    use crate::{P3, V3};

    #[test]
    fn empty_scene_has_no_hit() {
        let scene = Scene::new(vec![]);
        let ray = Ray::new(P3::new(0.0, 0.0, 3.0), V3::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn nearer_sphere_wins() {
        let scene = Scene::new(vec![
            Sphere::new(P3::new(0.0, 0.0, -4.0), 1.0, RGB::new(0.0, 1.0, 0.0)),
            Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0, RGB::new(1.0, 0.0, 0.0)),
        ]);
        let ray = Ray::new(P3::new(0.0, 0.0, 3.0), V3::new(0.0, 0.0, -1.0));
        let (sphere, dist) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(sphere.albedo, RGB::new(1.0, 0.0, 0.0));
        assert!((dist - 2.0).abs() < 1e-4);
    }

    #[test]
    fn first_sphere_wins_exact_tie() {
        let scene = Scene::new(vec![
            Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0, RGB::new(1.0, 0.0, 0.0)),
            Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0, RGB::new(0.0, 1.0, 0.0)),
        ]);
        let ray = Ray::new(P3::new(0.0, 0.0, 3.0), V3::new(0.0, 0.0, -1.0));
        let (sphere, _) = scene.nearest_hit(&ray).unwrap();
        assert!(std::ptr::eq(sphere, &scene.spheres()[0]));
    }
}
