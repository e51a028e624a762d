//! Owned, ordered, capacity-limited list of collage images

use crate::io::configuration::MAX_IMAGES;
use crate::io::error::{CollageError, Result};
use image::{DynamicImage, RgbaImage};

/// Decoded source image, immutable once created
#[derive(Debug, Clone)]
pub struct ImageAsset {
    image: RgbaImage,
    label: Option<String>,
}

impl ImageAsset {
    /// Wrap an RGBA buffer
    pub const fn new(image: RgbaImage) -> Self {
        Self { image, label: None }
    }

    /// Convert any decoded image to RGBA
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::new(image.to_rgba8())
    }

    /// Attach a display label such as the source file name
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Intrinsic width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Intrinsic height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel data
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Display label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Stable identifier of an item within one collection
///
/// Identifiers are never reused, even after removals or a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Numeric value of the identifier
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// One image in the collection
#[derive(Debug, Clone)]
pub struct CollageItem {
    /// Stable identifier
    pub id: ItemId,
    /// Decoded image
    pub asset: ImageAsset,
}

/// Ordered images the user has added
///
/// Order determines both draw order and layout slot assignment.
#[derive(Debug, Clone)]
pub struct Collection {
    items: Vec<CollageItem>,
    capacity: usize,
    next_id: u64,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    /// Empty collection holding at most [`MAX_IMAGES`] images
    pub const fn new() -> Self {
        Self::with_capacity(MAX_IMAGES)
    }

    /// Empty collection with a custom cap
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Add a batch of images, all or nothing
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::CapacityExceeded`] and leaves the collection
    /// untouched if the batch does not fit
    pub fn add_batch(&mut self, assets: Vec<ImageAsset>) -> Result<Vec<ItemId>> {
        self.check_room(assets.len())?;

        let ids = assets
            .into_iter()
            .map(|asset| {
                let id = ItemId(self.next_id);
                self.next_id += 1;
                self.items.push(CollageItem { id, asset });
                id
            })
            .collect();

        tracing::debug!(len = self.items.len(), "collection updated");
        Ok(ids)
    }

    /// Add a single image
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is full
    pub fn add(&mut self, asset: ImageAsset) -> Result<ItemId> {
        self.check_room(1)?;
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(CollageItem { id, asset });
        Ok(id)
    }

    /// Check whether `requested` more images fit
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::CapacityExceeded`] when they do not
    pub fn check_room(&self, requested: usize) -> Result<()> {
        if self.items.len() + requested > self.capacity {
            return Err(CollageError::CapacityExceeded {
                current: self.items.len(),
                requested,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Remove the item with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: ItemId) -> Option<CollageItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    /// Drop every item
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Assets in draw order
    pub fn assets(&self) -> impl Iterator<Item = &ImageAsset> {
        self.items.iter().map(|item| &item.asset)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of images that can still be added
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }
}
