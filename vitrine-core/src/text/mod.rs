//! Scrolling text log
//!
//! A [`TextLog`] hosts up to `BOXES` text boxes that share a pool of `LINES`
//! line buffers of `WIDTH` bytes each. Creating a box reserves `rows + 1`
//! lines for it; pushing a line recycles the oldest once more than `rows`
//! are held, so a box never needs more memory after it is created.

mod list;
mod pool;

pub use list::{IndexList, Link};
pub use pool::BitPool;

use heapless::Vec;

/// Text log errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextLogError {
    /// All text boxes are in use
    NoFreeBox,
    /// Not enough line buffers left for the requested rows
    NoFreeLines,
    /// Handle does not name a live text box
    InvalidHandle,
    /// Requested line width exceeds the buffer width
    LineTooWide,
    /// Line width of zero
    ZeroWidth,
    /// A box needs at least one row
    ZeroRows,
}

/// Handle to one text box
///
/// Carries the slot's generation, so a handle kept past `destroy` stays
/// invalid even after the slot is handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBoxId {
    slot: u8,
    generation: u8,
}

#[derive(Debug, Clone, Copy)]
struct TextBox {
    /// Lines reserved for this box but not holding text
    spare: IndexList,
    /// Lines holding text, oldest first
    rows: IndexList,
    max_rows: usize,
    line_width: usize,
}

impl TextBox {
    const EMPTY: Self = Self {
        spare: IndexList::new(),
        rows: IndexList::new(),
        max_rows: 0,
        line_width: 0,
    };
}

/// Fixed arena of text boxes and line buffers
pub struct TextLog<const BOXES: usize = 8, const LINES: usize = 32, const WIDTH: usize = 64> {
    box_pool: BitPool<BOXES>,
    line_pool: BitPool<LINES>,
    boxes: [TextBox; BOXES],
    generations: [u8; BOXES],
    links: [Link; LINES],
    lines: [Vec<u8, WIDTH>; LINES],
}

impl<const BOXES: usize, const LINES: usize, const WIDTH: usize> TextLog<BOXES, LINES, WIDTH> {
    pub const fn new() -> Self {
        Self {
            box_pool: BitPool::new(),
            line_pool: BitPool::new(),
            boxes: [TextBox::EMPTY; BOXES],
            generations: [0; BOXES],
            links: [Link::UNLINKED; LINES],
            lines: [const { Vec::new() }; LINES],
        }
    }

    /// Create a box showing the latest `rows` lines of up to `line_width`
    /// bytes each
    ///
    /// Nothing is reserved unless both the box and all `rows + 1` lines are
    /// available.
    pub fn create(&mut self, rows: usize, line_width: usize) -> Result<TextBoxId, TextLogError> {
        if rows == 0 {
            return Err(TextLogError::ZeroRows);
        }
        if line_width == 0 {
            return Err(TextLogError::ZeroWidth);
        }
        if line_width > WIDTH {
            return Err(TextLogError::LineTooWide);
        }
        if self.box_pool.free_count() == 0 {
            return Err(TextLogError::NoFreeBox);
        }
        if self.line_pool.free_count() < rows + 1 {
            return Err(TextLogError::NoFreeLines);
        }

        let index = self.box_pool.checkout().ok_or(TextLogError::NoFreeBox)?;
        let mut text_box = TextBox {
            max_rows: rows,
            line_width,
            ..TextBox::EMPTY
        };
        for _ in 0..=rows {
            let Some(line) = self.line_pool.checkout() else {
                break;
            };
            self.lines[line].clear();
            text_box.spare.push_back(&mut self.links, line);
        }
        self.boxes[index] = text_box;
        Ok(TextBoxId {
            slot: index as u8,
            generation: self.generations[index],
        })
    }

    /// Release a box and all of its lines
    pub fn destroy(&mut self, id: TextBoxId) -> Result<(), TextLogError> {
        let index = self.index(id)?;
        let mut text_box = self.boxes[index];
        while let Some(line) = text_box.rows.pop_front(&mut self.links) {
            self.release_line(line);
        }
        while let Some(line) = text_box.spare.pop_front(&mut self.links) {
            self.release_line(line);
        }
        self.boxes[index] = TextBox::EMPTY;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.box_pool.release(index);
        Ok(())
    }

    /// Append a line, truncated to the box's line width
    pub fn push(&mut self, id: TextBoxId, bytes: &[u8]) -> Result<(), TextLogError> {
        let index = self.index(id)?;
        let text_box = &mut self.boxes[index];
        let line = text_box
            .spare
            .pop_front(&mut self.links)
            .ok_or(TextLogError::NoFreeLines)?;

        let n = bytes.len().min(text_box.line_width);
        let buf = &mut self.lines[line];
        buf.clear();
        if buf.extend_from_slice(&bytes[..n]).is_err() {
            text_box.spare.push_back(&mut self.links, line);
            return Err(TextLogError::LineTooWide);
        }
        text_box.rows.push_back(&mut self.links, line);

        if text_box.rows.len() > text_box.max_rows {
            if let Some(oldest) = text_box.rows.pop_front(&mut self.links) {
                text_box.spare.push_back(&mut self.links, oldest);
            }
        }
        Ok(())
    }

    /// Drop every line of a box, keeping its reservation
    pub fn clear(&mut self, id: TextBoxId) -> Result<(), TextLogError> {
        let index = self.index(id)?;
        let text_box = &mut self.boxes[index];
        while let Some(line) = text_box.rows.pop_front(&mut self.links) {
            self.lines[line].clear();
            text_box.spare.push_back(&mut self.links, line);
        }
        Ok(())
    }

    /// Line `pos` counted from the oldest, or `None` past the end
    pub fn row(&self, id: TextBoxId, pos: usize) -> Option<&[u8]> {
        let text_box = &self.boxes[self.index(id).ok()?];
        if pos >= text_box.max_rows {
            return None;
        }
        let line = text_box.rows.get(&self.links, pos)?;
        Some(self.lines[line].as_slice())
    }

    /// Lines currently held (0 for an invalid handle)
    pub fn row_count(&self, id: TextBoxId) -> usize {
        self.index(id)
            .map_or(0, |index| self.boxes[index].rows.len())
    }

    /// Lines oldest first
    pub fn rows(&self, id: TextBoxId) -> impl Iterator<Item = &[u8]> + '_ {
        let rows = self.index(id).ok().map(|index| self.boxes[index].rows);
        rows.into_iter()
            .flat_map(move |list| list.iter(&self.links))
            .map(move |line| self.lines[line].as_slice())
    }

    /// Line buffers not reserved by any box
    pub fn free_lines(&self) -> usize {
        self.line_pool.free_count()
    }

    fn index(&self, id: TextBoxId) -> Result<usize, TextLogError> {
        let index = id.slot as usize;
        if self.box_pool.is_used(index) && self.generations.get(index) == Some(&id.generation) {
            Ok(index)
        } else {
            Err(TextLogError::InvalidHandle)
        }
    }

    fn release_line(&mut self, line: usize) {
        self.lines[line].clear();
        self.line_pool.release(line);
    }
}

impl<const BOXES: usize, const LINES: usize, const WIDTH: usize> Default for TextLog<BOXES, LINES, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec as StdVec;

    type SmallLog = TextLog<2, 8, 8>;

    fn contents(log: &SmallLog, id: TextBoxId) -> StdVec<StdVec<u8>> {
        log.rows(id).map(|row| row.to_vec()).collect()
    }

    #[test]
    fn test_create_reserves_rows_plus_one() {
        let mut log = SmallLog::new();
        let id = log.create(3, 8).unwrap();
        assert_eq!(log.free_lines(), 4);
        assert_eq!(log.row_count(id), 0);
    }

    #[test]
    fn test_create_failures_have_no_effect() {
        let mut log = SmallLog::new();
        assert_eq!(log.create(0, 8), Err(TextLogError::ZeroRows));
        assert_eq!(log.create(2, 0), Err(TextLogError::ZeroWidth));
        assert_eq!(log.create(2, 9), Err(TextLogError::LineTooWide));
        assert_eq!(log.create(8, 8), Err(TextLogError::NoFreeLines));
        assert_eq!(log.free_lines(), 8);

        let _a = log.create(1, 8).unwrap();
        let _b = log.create(1, 8).unwrap();
        assert_eq!(log.create(1, 8), Err(TextLogError::NoFreeBox));
        assert_eq!(log.free_lines(), 4);
    }

    #[test]
    fn test_push_scrolls_oldest_out() {
        let mut log = SmallLog::new();
        let id = log.create(2, 8).unwrap();
        log.push(id, b"one").unwrap();
        log.push(id, b"two").unwrap();
        log.push(id, b"three").unwrap();
        assert_eq!(log.row_count(id), 2);
        assert_eq!(log.row(id, 0), Some(&b"two"[..]));
        assert_eq!(log.row(id, 1), Some(&b"three"[..]));
        assert_eq!(log.row(id, 2), None);

        for i in 0..20u8 {
            log.push(id, &[b'a' + i]).unwrap();
        }
        assert_eq!(contents(&log, id), [b"s".to_vec(), b"t".to_vec()]);
    }

    #[test]
    fn test_push_truncates_to_line_width() {
        let mut log = SmallLog::new();
        let id = log.create(1, 4).unwrap();
        log.push(id, b"abcdefgh").unwrap();
        assert_eq!(log.row(id, 0), Some(&b"abcd"[..]));
        log.push(id, b"").unwrap();
        assert_eq!(log.row(id, 0), Some(&b""[..]));
    }

    #[test]
    fn test_clear_keeps_reservation() {
        let mut log = SmallLog::new();
        let id = log.create(2, 8).unwrap();
        log.push(id, b"x").unwrap();
        log.clear(id).unwrap();
        assert_eq!(log.row_count(id), 0);
        assert_eq!(log.free_lines(), 5);
        log.push(id, b"y").unwrap();
        assert_eq!(contents(&log, id), [b"y".to_vec()]);
    }

    #[test]
    fn test_destroy_returns_everything() {
        let mut log = SmallLog::new();
        let a = log.create(2, 8).unwrap();
        let b = log.create(1, 8).unwrap();
        log.push(a, b"hello").unwrap();
        log.destroy(a).unwrap();
        assert_eq!(log.free_lines(), 6);

        assert_eq!(log.push(a, b"late"), Err(TextLogError::InvalidHandle));
        assert_eq!(log.destroy(a), Err(TextLogError::InvalidHandle));
        assert_eq!(log.row_count(a), 0);
        assert!(log.row(a, 0).is_none());

        // Slot is reusable and the other box is untouched
        let c = log.create(5, 8).unwrap();
        log.push(b, b"keep").unwrap();
        log.push(c, b"new").unwrap();
        assert_eq!(contents(&log, b), [b"keep".to_vec()]);
        assert_eq!(contents(&log, c), [b"new".to_vec()]);
    }

    #[test]
    fn test_stale_handle_rejected_after_slot_reuse() {
        let mut log = SmallLog::new();
        let old = log.create(1, 8).unwrap();
        log.destroy(old).unwrap();

        let new = log.create(1, 8).unwrap();
        assert_ne!(old, new);
        assert_eq!(log.push(old, b"stale"), Err(TextLogError::InvalidHandle));
        assert_eq!(log.clear(old), Err(TextLogError::InvalidHandle));
        assert_eq!(log.destroy(old), Err(TextLogError::InvalidHandle));

        log.push(new, b"fresh").unwrap();
        assert_eq!(log.row_count(old), 0);
        assert_eq!(log.rows(old).count(), 0);
        assert_eq!(contents(&log, new), [b"fresh".to_vec()]);
    }
}
