use thiserror::Error;

/// Contract violations detected while building or driving a pager.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PagerError {
    #[error("pager needs at least one page")]
    EmptyPager,

    #[error("initial index {index} out of range (pages: {page_count})")]
    InitialIndexOutOfRange { index: usize, page_count: usize },

    #[error("got {urls} image urls for {page_count} pages")]
    UrlCountMismatch { urls: usize, page_count: usize },

    #[error("invalid page size: {width}x{height}")]
    InvalidPageSize { width: f32, height: f32 },

    #[error("page index {index} out of range (pages: {page_count})")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("invalid pager config: {0}")]
    InvalidConfig(String),
}
