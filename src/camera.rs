use crate::math::LocalCoord;
use crate::*;

/// What the render kernel needs from a camera: one shared ray origin and a
/// row-major per-pixel direction array (index `x + y * width`) matching the
/// framebuffer's current resolution.
pub trait Camera {
    fn position(&self) -> P3;
    fn ray_directions(&self) -> &[V3];
}

/// Pinhole camera caching one ray direction per pixel. The cache is empty
/// until `set_resolution` is called and must be recomputed whenever the
/// output resolution changes.
pub struct PinHole {
    origin: P3,
    lc: LocalCoord,
    film_width: f32,
    directions: Vec<V3>,
}

impl PinHole {
    pub fn new(origin: P3, view_at: P3, view_up: V3, fov_degree: f32) -> Self {
        let lc = LocalCoord::new_zy(&origin, &(origin - view_at), &view_up);
        let fov_rad = fov_degree * std::f32::consts::PI / 180.0;
        let half_tan = (fov_rad / 2.0).tan();
        PinHole {
            origin,
            lc,
            film_width: 2.0 * half_tan,
            directions: vec![],
        }
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        let half_v = self.film_width / 2.0;
        let half_u = if height == 0 {
            0.0
        } else {
            half_v * width as f32 / height as f32
        };
        let mut directions = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                let u = (x as f32 + 0.5) / width as f32 * 2.0 - 1.0;
                let v = 1.0 - (y as f32 + 0.5) / height as f32 * 2.0;
                let local = V3::new(u * half_u, v * half_v, -1.0).normalize();
                directions.push(self.lc.l2w() * local);
            }
        }
        self.directions = directions;
    }
}

impl Camera for PinHole {
    fn position(&self) -> P3 {
        self.origin
    }

    fn ray_directions(&self) -> &[V3] {
        &self.directions
    }
}
