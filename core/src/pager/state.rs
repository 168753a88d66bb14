//! Current page and strip offset of a pager session.

use crate::error::PagerError;
use crate::types::{Offset, Size};

/// Index bookkeeping for the page strip.
///
/// The strip offset is always derived from the index: `x = -page_width * index + extra.x`,
/// `y = extra.y`. It is only ever changed through the transition methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerState {
    page_count: usize,
    current_index: usize,
    offset: Offset,
}

impl PagerState {
    pub fn new(
        page_count: usize,
        initial_index: usize,
        page_size: Size,
    ) -> Result<Self, PagerError> {
        if page_count == 0 {
            return Err(PagerError::EmptyPager);
        }
        if initial_index >= page_count {
            return Err(PagerError::InitialIndexOutOfRange { index: initial_index, page_count });
        }

        let mut state = Self { page_count, current_index: initial_index, offset: Offset::ZERO };
        state.move_to_desired_offset(page_size, Offset::ZERO);
        Ok(state)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.page_count
    }

    /// Step back one page and settle. Stays put on the first page.
    pub fn scroll_to_prev(&mut self, page_size: Size) {
        self.current_index = self.current_index.saturating_sub(1);
        self.move_to_desired_offset(page_size, Offset::ZERO);
    }

    /// Step forward one page and settle. Stays put on the last page.
    pub fn scroll_to_next(&mut self, page_size: Size) {
        self.current_index = (self.current_index + 1).min(self.page_count - 1);
        self.move_to_desired_offset(page_size, Offset::ZERO);
    }

    /// Place the strip on the current page, shifted by `extra`. With `Offset::ZERO` this is the
    /// settled position; a non-zero `extra` previews a page slide or a dismiss drag.
    pub fn move_to_desired_offset(&mut self, page_size: Size, extra: Offset) {
        self.offset = Offset {
            x: -page_size.width * self.current_index as f32 + extra.x,
            y: extra.y,
        };
    }

    /// Slide the strip vertically by the predicted release translation. Tearing the pager down
    /// is left to the caller.
    pub fn invoke_dismiss_transition(&mut self, page_size: Size, predicted_end_translation_y: f32) {
        self.move_to_desired_offset(page_size, Offset::new(0.0, predicted_end_translation_y));
    }
}
