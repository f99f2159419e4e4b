use crate::camera::Camera;
use crate::framebuffer::{FrameBuffer, PresentTarget};
use crate::ray::Ray;
use crate::rgb::RGBA;
use crate::scene::Scene;
use crate::shape::Sphere;
use crate::*;

use log::*;

const BACKGROUND: RGBA = RGBA {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Packs a unit-range color as `(A<<24) | (B<<16) | (G<<8) | R`, truncating
/// each channel to a byte. The caller clamps; out-of-range input saturates.
pub fn convert_to_rgba(color: &RGBA) -> u32 {
    let r = (color.r * 255.0) as u8;
    let g = (color.g * 255.0) as u8;
    let b = (color.b * 255.0) as u8;
    let a = (color.a * 255.0) as u8;

    (u32::from(a) << 24) | (u32::from(b) << 16) | (u32::from(g) << 8) | u32::from(r)
}

pub struct Renderer {
    light_dir: V3,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(V3::new(-1.0, -1.0, -1.0))
    }
}

impl Renderer {
    /// `light_dir` points the way the light shines; it is normalized here.
    pub fn new(light_dir: V3) -> Self {
        Renderer {
            light_dir: light_dir.normalize(),
        }
    }

    /// Traces one frame into `framebuffer` and publishes it. The camera's
    /// direction array must cover the buffer's current resolution.
    pub fn render<C, T>(&self, scene: &Scene, camera: &C, framebuffer: &mut FrameBuffer<T>)
    where
        C: Camera,
        T: PresentTarget,
    {
        let width = framebuffer.width();
        let height = framebuffer.height();
        let directions = camera.ray_directions();
        assert_eq!(
            directions.len(),
            (width as usize) * (height as usize),
            "camera ray directions do not cover the framebuffer"
        );

        let origin = camera.position();
        for y in 0..height {
            for x in 0..width {
                let dir = directions[(y * width + x) as usize];
                let ray = Ray::new(origin, dir);
                let color = self.trace_ray(scene, &ray).clamped();
                *framebuffer.at_mut(x, y) = convert_to_rgba(&color);
            }
        }
        framebuffer.publish();
        debug!("rendered {}x{} pixels", width, height);
    }

    /// Color seen along `ray`: nearest sphere shaded by the directional
    /// light, opaque background black on a miss.
    pub fn trace_ray(&self, scene: &Scene, ray: &Ray) -> RGBA {
        let (sphere, dist) = match scene.nearest_hit(ray) {
            Some(hit) => hit,
            None => return BACKGROUND,
        };

        // the sphere sits at the local origin, so the local hit point is
        // also the unnormalized surface normal
        let local_hit = (ray.origin - sphere.center) + ray.dir * dist;
        self.shade(sphere, &local_hit.normalize())
    }

    /// Lambertian term against the renderer's light, clamped to
    /// non-negative. Alpha is always 1; no clamping of the color here.
    pub fn shade(&self, sphere: &Sphere, normal: &V3) -> RGBA {
        let d = normal.dot(&-self.light_dir).max(0.0);
        RGBA::opaque(sphere.albedo * d)
    }
}
