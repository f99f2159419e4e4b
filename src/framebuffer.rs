use log::*;

/// Backing presentable resource a finished frame is uploaded into. Created
/// lazily by the framebuffer on first resize; display is the implementor's
/// concern.
pub trait PresentTarget {
    fn create(width: u32, height: u32) -> Self;
    fn resize(&mut self, width: u32, height: u32);
    fn set_data(&mut self, pixels: &[u32]);
}

/// CPU-side packed-pixel buffer, one `u32` per pixel, plus the presentable
/// resource it publishes into. Contents are undefined until the first
/// render after a resize.
pub struct FrameBuffer<T> {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    target: Option<T>,
}

impl<T: PresentTarget> FrameBuffer<T> {
    pub fn new() -> Self {
        FrameBuffer {
            width: 0,
            height: 0,
            pixels: vec![],
            target: None,
        }
    }

    /// Reallocates the pixel array and the backing resource for the new
    /// dimensions, discarding prior contents. Requesting the current
    /// dimensions again is a no-op. Zero-area dimensions are legal.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(target) = self.target.as_mut() {
            if self.width == width && self.height == height {
                return;
            }
            target.resize(width, height);
        } else {
            self.target = Some(T::create(width, height));
        }
        debug!(
            "framebuffer {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width as usize) * (height as usize)];
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut u32 {
        &mut self.pixels[(y * self.width + x) as usize]
    }

    /// Uploads the CPU pixel array into the backing resource.
    pub fn publish(&mut self) {
        if let Some(target) = self.target.as_mut() {
            target.set_data(&self.pixels);
        }
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recording {
        dims: (u32, u32),
        resizes: Vec<(u32, u32)>,
        uploaded: Vec<u32>,
        uploads: usize,
    }

    impl PresentTarget for Recording {
        fn create(width: u32, height: u32) -> Self {
            Recording {
                dims: (width, height),
                resizes: vec![],
                uploaded: vec![],
                uploads: 0,
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.dims = (width, height);
            self.resizes.push((width, height));
        }

        fn set_data(&mut self, pixels: &[u32]) {
            self.uploaded = pixels.to_vec();
            self.uploads += 1;
        }
    }

    #[test]
    fn first_resize_creates_the_target() {
        let mut fb = FrameBuffer::<Recording>::new();
        assert!(fb.target().is_none());
        fb.resize(2, 1);
        let target = fb.target().unwrap();
        assert_eq!(target.dims, (2, 1));
        assert!(target.resizes.is_empty());
        assert_eq!(fb.pixels().len(), 2);
    }

    #[test]
    fn same_size_resize_is_a_noop() {
        let mut fb = FrameBuffer::<Recording>::new();
        fb.resize(4, 3);
        *fb.at_mut(2, 1) = 0xdead_beef;
        let ptr = fb.pixels().as_ptr();
        fb.resize(4, 3);
        assert_eq!(fb.pixels().as_ptr(), ptr);
        assert_eq!(fb.pixels()[(1 * 4 + 2) as usize], 0xdead_beef);
        assert!(fb.target().unwrap().resizes.is_empty());
    }

    #[test]
    fn new_size_reallocates_exactly() {
        let mut fb = FrameBuffer::<Recording>::new();
        fb.resize(2, 2);
        *fb.at_mut(0, 0) = 7;
        fb.resize(5, 4);
        assert_eq!(fb.pixels().len(), 20);
        assert_eq!((fb.width(), fb.height()), (5, 4));
        assert_eq!(fb.target().unwrap().resizes, vec![(5, 4)]);
        assert!(fb.pixels().iter().all(|px| *px != 7));
    }

    #[test]
    fn zero_area_is_legal() {
        let mut fb = FrameBuffer::<Recording>::new();
        fb.resize(0, 5);
        assert!(fb.pixels().is_empty());
        fb.publish();
        assert_eq!(fb.target().unwrap().uploads, 1);
    }

    #[test]
    fn publish_uploads_the_pixel_array() {
        let mut fb = FrameBuffer::<Recording>::new();
        fb.resize(2, 1);
        *fb.at_mut(0, 0) = 1;
        *fb.at_mut(1, 0) = 2;
        fb.publish();
        assert_eq!(fb.target().unwrap().uploaded, vec![1, 2]);
    }
}
