use crate::core::cycle::CircularIndex;
use crate::utils::error::Result;
use serde::Serialize;

const UNIT: &str = "gallery carousel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub image: &'a str,
    pub is_current: bool,
}

/// Image gallery moved by user actions only; wraps at both ends.
#[derive(Debug, Clone)]
pub struct GalleryCarousel {
    images: Vec<String>,
    position: CircularIndex,
}

impl GalleryCarousel {
    pub fn new<I, S>(images: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        let position = CircularIndex::new(UNIT, images.len())?;
        Ok(Self { images, position })
    }

    pub fn next(&mut self) {
        self.position.advance();
    }

    pub fn previous(&mut self) {
        self.position.retreat();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.position.set(index)
    }

    pub fn current(&self) -> &str {
        &self.images[self.position.get()]
    }

    pub fn current_index(&self) -> usize {
        self.position.get()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false: construction rejects empty galleries.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn thumbnails(&self) -> Vec<Thumbnail<'_>> {
        let current = self.position.get();
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| Thumbnail {
                index,
                image,
                is_current: index == current,
            })
            .collect()
    }
}
