use anyhow::Context;
use getopts::Options;
use log::*;

use spheretrace::camera::PinHole;
use spheretrace::framebuffer::{FrameBuffer, PresentTarget};
use spheretrace::renderer::Renderer;
use spheretrace::rgb::RGB;
use spheretrace::scene::Scene;
use spheretrace::shape::Sphere;
use spheretrace::{P3, V3};

/// Retains the published frame so it can be written out after the render.
struct RetainedImage {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PresentTarget for RetainedImage {
    fn create(width: u32, height: u32) -> Self {
        RetainedImage {
            width,
            height,
            pixels: vec![],
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
    }

    fn set_data(&mut self, pixels: &[u32]) {
        self.pixels = pixels.to_vec();
    }
}

impl RetainedImage {
    fn save_png(&self, path: &str) -> anyhow::Result<()> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            // packed (A<<24)|(B<<16)|(G<<8)|R, so little-endian bytes are RGBA
            bytes.extend_from_slice(&px.to_le_bytes());
        }
        image::save_buffer(path, &bytes, self.width, self.height, image::ColorType::Rgba8)
            .with_context(|| format!("writing {}", path))
    }
}

fn make_scene() -> Scene {
    Scene::new(vec![
        Sphere::new(P3::new(0.0, 0.0, 0.0), 0.5, RGB::new(1.0, 0.0, 1.0)),
        Sphere::new(P3::new(1.2, 0.3, -1.5), 0.7, RGB::new(0.2, 0.8, 0.3)),
        Sphere::new(P3::new(-1.1, -0.2, -0.8), 0.4, RGB::new(0.9, 0.6, 0.1)),
    ])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options::new();
    opts.optopt("o", "output", "output PNG path", "FILE");
    opts.optopt("", "width", "output width in pixels", "N");
    opts.optopt("", "height", "output height in pixels", "N");
    opts.optflag("h", "help", "print this help");
    let matches = opts.parse(&args[1..])?;
    if matches.opt_present("h") {
        print!("{}", opts.usage(&format!("Usage: {} [options]", args[0])));
        return Ok(());
    }
    let width: u32 = matches.opt_get_default("width", 1280)?;
    let height: u32 = matches.opt_get_default("height", 720)?;
    let output = matches
        .opt_str("o")
        .unwrap_or_else(|| "output.png".to_string());

    let scene = make_scene();

    let mut camera = PinHole::new(
        P3::new(0.0, 0.0, 3.0),
        P3::new(0.0, 0.0, 0.0),
        V3::new(0.0, 1.0, 0.0),
        45.0,
    );
    camera.set_resolution(width, height);

    let mut framebuffer = FrameBuffer::<RetainedImage>::new();
    framebuffer.resize(width, height);

    let renderer = Renderer::default();
    renderer.render(&scene, &camera, &mut framebuffer);

    framebuffer
        .target()
        .context("framebuffer has no backing image")?
        .save_png(&output)?;
    info!("wrote {}x{} frame to {}", width, height, output);
    Ok(())
}
