use crate::utils::error::{FolioError, Result};

/// Index into a fixed-length, non-empty sequence that wraps instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularIndex {
    index: usize,
    len: usize,
}

impl CircularIndex {
    pub fn new(unit: &'static str, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(FolioError::invalid_configuration(
                unit,
                "backing sequence must not be empty",
            ));
        }
        Ok(Self { index: 0, len })
    }

    pub fn get(&self) -> usize {
        self.index
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Leaves the index untouched when `index` is out of range.
    pub fn set(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(FolioError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_rejected() {
        let err = CircularIndex::new("test", 0).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfiguration { unit: "test", .. }));
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let mut idx = CircularIndex::new("test", 3).unwrap();
        assert_eq!(idx.retreat(), 2);
        assert_eq!(idx.advance(), 0);
        assert_eq!(idx.advance(), 1);
        assert_eq!(idx.advance(), 2);
        assert_eq!(idx.advance(), 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut idx = CircularIndex::new("test", 1).unwrap();
        assert_eq!(idx.advance(), 0);
        assert_eq!(idx.retreat(), 0);
    }

    #[test]
    fn test_set_out_of_range_keeps_index() {
        let mut idx = CircularIndex::new("test", 3).unwrap();
        idx.set(1).unwrap();
        assert!(matches!(
            idx.set(3),
            Err(FolioError::OutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(idx.get(), 1);
    }
}
