//! Image decoding and the fixed-capacity texture registry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use image::{GenericImageView, ImageError};

use crate::error::SceneError;
use crate::renderer::backend::{TextureBackend, TextureHandle};

/// The number of texture units the scene shader can sample from.
pub const TEXTURE_SLOTS: usize = 16;

/// Returned by the `*_or_sentinel` lookups when no entry matches.
pub const NOT_FOUND: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    pub fn channels(self) -> u8 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Tightly packed 8-bit pixel rows, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

/// Decodes the image file at `path`. The format is detected from the file
/// contents, falling back to the extension. Only 3 and 4 channel images are
/// accepted. The rows are flipped so that the first row in `pixels` is the
/// bottom of the image, which is where GL expects texture coordinate v=0.
pub fn decode_image(path: &Path) -> Result<DecodedImage, SceneError> {
    let decode_error = |source| SceneError::TextureDecode {
        path: path.to_path_buf(),
        source,
    };
    let image = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_error(ImageError::IoError(err)))?
        .decode()
        .map_err(decode_error)?;
    let format = match image.color().channel_count() {
        3 => PixelFormat::Rgb8,
        4 => PixelFormat::Rgba8,
        channels => {
            return Err(SceneError::UnsupportedChannelCount {
                path: path.to_path_buf(),
                channels,
            })
        }
    };
    let image = image.flipv();
    let (width, height) = image.dimensions();
    let pixels = match format {
        PixelFormat::Rgb8 => image.into_rgb8().into_raw(),
        PixelFormat::Rgba8 => image.into_rgba8().into_raw(),
    };
    Ok(DecodedImage {
        width,
        height,
        format,
        pixels,
    })
}

#[derive(Debug, Clone)]
struct TextureEntry {
    tag: String,
    handle: TextureHandle,
}

/// Maps tags to uploaded textures. The registration index of an entry is
/// also the texture unit it gets bound to by [`TextureRegistry::bind_all`].
///
/// Tags may repeat. Every registration takes a slot, but lookups always
/// resolve to the first entry registered with the tag.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    first_slot_by_tag: HashMap<String, usize>,
}

impl TextureRegistry {
    pub fn new() -> TextureRegistry {
        TextureRegistry::default()
    }

    /// Decodes the image at `path`, uploads it and registers it under `tag`.
    /// Returns the slot the texture was registered in.
    pub fn load<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<usize, SceneError> {
        let path = path.as_ref();
        self.ensure_free_slot(tag)?;
        let image = decode_image(path)?;
        log::info!(
            "loaded image {}: width {}, height {}, channels {}",
            path.display(),
            image.width,
            image.height,
            image.format.channels(),
        );
        self.register(backend, &image, tag)
    }

    /// Uploads an already decoded image and registers it under `tag`.
    pub fn register<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        image: &DecodedImage,
        tag: &str,
    ) -> Result<usize, SceneError> {
        self.ensure_free_slot(tag)?;
        let handle = backend.create_texture(image)?;
        let slot = self.entries.len();
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        match self.first_slot_by_tag.entry(tag.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
            }
            Entry::Occupied(occupied) => log::warn!(
                "texture tag \"{tag}\" registered again in slot {slot}, lookups keep resolving to slot {}",
                occupied.get(),
            ),
        }
        Ok(slot)
    }

    /// Binds every registered texture to the texture unit matching its slot.
    pub fn bind_all<B: TextureBackend + ?Sized>(&self, backend: &mut B) {
        for (unit, entry) in self.entries.iter().enumerate() {
            backend.bind_to_unit(unit as u32, entry.handle);
        }
    }

    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.find_slot(tag).map(|slot| self.entries[slot].handle)
    }

    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.first_slot_by_tag.get(tag).copied()
    }

    /// Like [`find_slot`](Self::find_slot), but returns [`NOT_FOUND`] on a miss.
    pub fn slot_or_sentinel(&self, tag: &str) -> i32 {
        self.find_slot(tag).map_or(NOT_FOUND, |slot| slot as i32)
    }

    /// Like [`find_handle`](Self::find_handle), but returns [`NOT_FOUND`] on a miss.
    pub fn handle_or_sentinel(&self, tag: &str) -> i64 {
        self.find_handle(tag)
            .map_or(NOT_FOUND as i64, |handle| handle.0 as i64)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.tag.as_str())
    }

    /// Deletes every registered texture and empties the registry.
    pub fn clear<B: TextureBackend + ?Sized>(&mut self, backend: &mut B) {
        for entry in self.entries.drain(..) {
            backend.delete_texture(entry.handle);
        }
        self.first_slot_by_tag.clear();
    }

    fn ensure_free_slot(&self, tag: &str) -> Result<(), SceneError> {
        if self.entries.len() >= TEXTURE_SLOTS {
            return Err(SceneError::RegistryFull {
                tag: tag.to_string(),
                capacity: TEXTURE_SLOTS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use image::{GrayAlphaImage, GrayImage, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::*;
    use crate::renderer::testing::FakeTextures;

    fn rgb_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        RgbImage::from_pixel(4, 2, Rgb([10, 20, 30])).save(&path).unwrap();
        path
    }

    fn rgba_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 128]))
            .save(&path)
            .unwrap();
        path
    }

    fn small_image() -> DecodedImage {
        DecodedImage {
            width: 1,
            height: 1,
            format: PixelFormat::Rgb8,
            pixels: vec![255, 255, 255],
        }
    }

    #[test]
    fn loads_rgb_and_rgba_images() {
        let dir = TempDir::new().unwrap();
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();

        let fur = registry.load(&mut backend, rgb_png(&dir, "fur.png"), "fur").unwrap();
        let glass = registry
            .load(&mut backend, rgba_png(&dir, "glass.png"), "glass")
            .unwrap();

        assert_eq!((fur, glass), (0, 1));
        assert_eq!(backend.created.len(), 2);
        assert_eq!(backend.created[0].format, PixelFormat::Rgb8);
        assert_eq!(backend.created[0].pixels.len(), 4 * 2 * 3);
        assert_eq!(backend.created[1].format, PixelFormat::Rgba8);
        assert_eq!(registry.find_slot("fur"), Some(0));
        assert_eq!(registry.find_slot("glass"), Some(1));
        assert_eq!(registry.find_handle("fur"), Some(backend.handles()[0]));
        assert_eq!(registry.find_handle("glass"), Some(backend.handles()[1]));
    }

    #[test]
    fn rejects_one_and_two_channel_images() {
        let dir = TempDir::new().unwrap();
        let gray = dir.path().join("gray.png");
        let gray_alpha = dir.path().join("gray_alpha.png");
        GrayImage::new(2, 2).save(&gray).unwrap();
        GrayAlphaImage::new(2, 2).save(&gray_alpha).unwrap();

        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        let err = registry.load(&mut backend, &gray, "gray").unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedChannelCount { channels: 1, .. }));
        let err = registry.load(&mut backend, &gray_alpha, "gray").unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedChannelCount { channels: 2, .. }));

        assert!(registry.is_empty());
        assert!(backend.created.is_empty());
        assert_eq!(registry.find_slot("gray"), None);
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        let err = registry
            .load(&mut backend, dir.path().join("nope.jpg"), "nope")
            .unwrap_err();
        assert!(matches!(err, SceneError::TextureDecode { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn format_is_detected_from_the_file_contents() {
        let dir = TempDir::new().unwrap();
        let png = rgb_png(&dir, "source.png");
        let misnamed = dir.path().join("bluefur.jpg");
        std::fs::copy(&png, &misnamed).unwrap();

        let decoded = decode_image(&misnamed).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.format, PixelFormat::Rgb8);
        assert_eq!(&decoded.pixels[..3], &[10, 20, 30]);
    }

    #[test]
    fn decoded_rows_start_at_the_bottom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stripes.png");
        let mut stripes = RgbImage::new(1, 2);
        stripes.put_pixel(0, 0, Rgb([255, 0, 0]));
        stripes.put_pixel(0, 1, Rgb([0, 0, 255]));
        stripes.save(&path).unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.pixels, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn seventeenth_registration_is_a_capacity_error() {
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        for i in 0..TEXTURE_SLOTS {
            let slot = registry
                .register(&mut backend, &small_image(), &format!("t{i}"))
                .unwrap();
            assert_eq!(slot, i);
        }

        let err = registry
            .register(&mut backend, &small_image(), "overflow")
            .unwrap_err();
        assert!(matches!(
            err,
            SceneError::RegistryFull { capacity: TEXTURE_SLOTS, .. }
        ));
        // The capacity check runs before the file is even opened.
        let err = registry
            .load(&mut backend, "does/not/exist.png", "overflow")
            .unwrap_err();
        assert!(matches!(err, SceneError::RegistryFull { .. }));

        assert_eq!(registry.len(), TEXTURE_SLOTS);
        assert_eq!(backend.created.len(), TEXTURE_SLOTS);
        assert_eq!(registry.find_slot("overflow"), None);
    }

    #[test]
    fn bind_all_binds_units_in_registration_order() {
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        for tag in ["fur", "black", "glass"] {
            registry.register(&mut backend, &small_image(), tag).unwrap();
        }

        registry.bind_all(&mut backend);

        let handles = backend.handles();
        assert_eq!(
            backend.bound,
            vec![(0, handles[0]), (1, handles[1]), (2, handles[2])]
        );
    }

    #[test]
    fn first_registration_of_a_tag_wins() {
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        registry.register(&mut backend, &small_image(), "wall").unwrap();
        registry.register(&mut backend, &small_image(), "floor").unwrap();
        let again = registry.register(&mut backend, &small_image(), "wall").unwrap();

        assert_eq!(again, 2);
        assert_eq!(registry.tags().collect::<Vec<_>>(), vec!["wall", "floor", "wall"]);
        assert_eq!(registry.find_slot("wall"), Some(0));
        assert_eq!(registry.find_handle("wall"), Some(backend.handles()[0]));

        registry.bind_all(&mut backend);
        assert_eq!(backend.bound.len(), 3);
    }

    #[test]
    fn unknown_tags_resolve_to_the_sentinel() {
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        registry.register(&mut backend, &small_image(), "fur").unwrap();

        assert_eq!(registry.find_slot("Fur"), None);
        assert_eq!(registry.find_handle("screen"), None);
        assert_eq!(registry.slot_or_sentinel("screen"), NOT_FOUND);
        assert_eq!(registry.handle_or_sentinel("screen"), NOT_FOUND as i64);
        assert_eq!(registry.slot_or_sentinel("fur"), 0);
    }

    #[test]
    fn clear_deletes_every_texture() {
        let mut backend = FakeTextures::default();
        let mut registry = TextureRegistry::new();
        for tag in ["book", "pages"] {
            registry.register(&mut backend, &small_image(), tag).unwrap();
        }
        let handles = backend.handles();

        registry.clear(&mut backend);

        assert_eq!(backend.deleted, handles);
        assert!(registry.is_empty());
        assert_eq!(registry.find_handle("book"), None);
        // Slots are reusable after a clear.
        assert_eq!(
            registry.register(&mut backend, &small_image(), "pages").unwrap(),
            0
        );
    }
}
