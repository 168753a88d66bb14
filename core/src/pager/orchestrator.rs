//! Wires per-page gesture state to the shared pager state.
//!
//! [`ImagePager`] owns the [`PagerState`] and one [`GestureState`] per page and is the only
//! thing that mutates either. Hosts feed it gesture samples and image load results, apply the
//! returned [`PagerUpdate`], and paint from [`ImagePager::frame`].

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::{AnimationSpec, PagerConfig};
use crate::error::PagerError;
use crate::geometry::fit_image;
use crate::gesture::{GestureInput, GestureState, OverDragEvent, ScaleLimits};
use crate::source::{ImageLoadState, ImageRequest, LoadedImage};
use crate::types::{Axis, Offset, PageTransform, Size};

use super::state::PagerState;

/// Construction parameters for a pager session.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerOptions {
    pub page_count: usize,
    pub initial_index: usize,
    pub page_size: Size,
    /// One URL per page, in page order.
    pub image_urls: Vec<String>,
}

impl PagerOptions {
    /// One page per URL, opened on the first page.
    pub fn new<I, S>(image_urls: I, page_size: Size) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let image_urls: Vec<String> = image_urls.into_iter().map(Into::into).collect();
        Self { page_count: image_urls.len(), initial_index: 0, page_size, image_urls }
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }
}

/// Target value plus how to get there. `animation: None` means apply immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    pub target: T,
    pub animation: Option<AnimationSpec>,
}

impl<T> Transition<T> {
    fn immediate(target: T) -> Self {
        Self { target, animation: None }
    }

    fn animated(target: T, animation: AnimationSpec) -> Self {
        Self { target, animation: Some(animation) }
    }
}

/// What changed after one input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagerUpdate {
    /// New strip offset, if the strip moved.
    pub strip: Option<Transition<Offset>>,
    /// New transform of the page that received the input.
    pub page: Option<Transition<PageTransform>>,
    /// The dismiss threshold was crossed by this input.
    pub dismissed: bool,
}

/// Render snapshot of a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame<'a> {
    pub index: usize,
    pub url: &'a str,
    /// Top-left corner of the page inside the strip.
    pub origin: Offset,
    pub viewport: Size,
    pub transform: PageTransform,
    /// `None` while loading or after a failed load; the page stays interactive either way.
    pub image: Option<&'a LoadedImage>,
}

/// Render snapshot of the whole strip.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerFrame<'a> {
    pub strip_offset: Offset,
    pub strip_size: Size,
    pub current_index: usize,
    pub pages: Vec<PageFrame<'a>>,
}

#[derive(Debug)]
struct Page {
    url: String,
    image: ImageLoadState,
    gestures: GestureState,
}

type DismissCallback = Box<dyn FnOnce()>;

pub struct ImagePager {
    config: PagerConfig,
    page_size: Size,
    state: PagerState,
    pages: Vec<Page>,
    on_dismiss: Option<DismissCallback>,
    dismissed: bool,
}

impl fmt::Debug for ImagePager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePager")
            .field("config", &self.config)
            .field("page_size", &self.page_size)
            .field("state", &self.state)
            .field("pages", &self.pages)
            .field("dismissed", &self.dismissed)
            .finish_non_exhaustive()
    }
}

impl ImagePager {
    /// Validate `options` and open the pager on `options.initial_index`.
    ///
    /// `on_dismiss` runs once, when a vertical drag is released past the dismiss threshold.
    pub fn new(
        options: PagerOptions,
        config: PagerConfig,
        on_dismiss: impl FnOnce() + 'static,
    ) -> Result<Self, PagerError> {
        config.validate()?;
        ensure_page_size(options.page_size)?;
        if options.image_urls.len() != options.page_count {
            return Err(PagerError::UrlCountMismatch {
                urls: options.image_urls.len(),
                page_count: options.page_count,
            });
        }

        let state = PagerState::new(options.page_count, options.initial_index, options.page_size)?;
        let limits = ScaleLimits::from(&config);
        let pages = options
            .image_urls
            .into_iter()
            .map(|url| Page {
                url,
                image: ImageLoadState::Loading,
                gestures: GestureState::new(options.page_size, Size::ZERO, limits),
            })
            .collect();

        info!(
            target: "pager",
            pages = options.page_count,
            initial_index = options.initial_index,
            "pager opened"
        );

        Ok(Self {
            config,
            page_size: options.page_size,
            state,
            pages,
            on_dismiss: Some(Box::new(on_dismiss)),
            dismissed: false,
        })
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn gesture_state(&self, index: usize) -> Option<&GestureState> {
        self.pages.get(index).map(|page| &page.gestures)
    }

    /// Feed one gesture sample for page `index` and apply whatever it triggers.
    ///
    /// Input arriving after dismissal is ignored.
    pub fn handle_gesture(
        &mut self,
        index: usize,
        input: GestureInput,
    ) -> Result<PagerUpdate, PagerError> {
        self.check_index(index)?;
        if self.dismissed {
            debug!(target: "pager", index, ?input, "ignoring gesture after dismissal");
            return Ok(PagerUpdate::default());
        }

        let output = self.pages[index].gestures.handle(input);
        let transform = self.pages[index].gestures.transform();
        let page = if output.animate_transform {
            Transition::animated(transform, self.config.settle_animation)
        } else {
            Transition::immediate(transform)
        };
        let mut update = PagerUpdate { page: Some(page), ..PagerUpdate::default() };

        for event in output.events {
            self.apply(event, &mut update);
            if self.dismissed {
                break;
            }
        }

        Ok(update)
    }

    /// Record the loader's result for page `index`.
    ///
    /// A successful load resizes the page's draggable range to the fitted image; anything else
    /// leaves the page without image content but still pageable and dismissable.
    pub fn image_loaded(&mut self, index: usize, result: ImageLoadState) -> Result<(), PagerError> {
        self.check_index(index)?;
        let page_size = self.page_size;
        let page = &mut self.pages[index];

        let fitted = match &result {
            ImageLoadState::Success(image) => {
                let fitted = fit_image(image.dimensions, page_size);
                debug!(
                    target: "pager",
                    index,
                    width = image.width(),
                    height = image.height(),
                    fitted_width = fitted.width,
                    fitted_height = fitted.height,
                    "image ready"
                );
                fitted
            }
            ImageLoadState::Failure(reason) => {
                warn!(target: "pager", index, url = %page.url, %reason, "image failed to load");
                Size::ZERO
            }
            ImageLoadState::Loading => Size::ZERO,
        };

        page.gestures.set_image_size(fitted);
        page.image = result;
        Ok(())
    }

    /// Pages whose image has not arrived yet, in page order.
    pub fn pending_images(&self) -> impl Iterator<Item = ImageRequest<'_>> + '_ {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.image.is_loading())
            .map(|(index, page)| ImageRequest { index, url: page.url.as_str() })
    }

    /// Drop the pan/zoom state of page `index`, as when its view is remounted.
    ///
    /// A remount in the middle of an over-drag cancels it, so the strip settles back.
    pub fn reset_page(&mut self, index: usize) -> Result<PagerUpdate, PagerError> {
        self.check_index(index)?;
        let was_over_dragging = self.pages[index].gestures.dragging_over_axis().is_some();
        self.pages[index].gestures.reset();
        debug!(target: "pager", index, was_over_dragging, "page gesture state reset");

        let mut update = PagerUpdate::default();
        if was_over_dragging && !self.dismissed {
            self.settle(&mut update);
        }
        Ok(update)
    }

    /// Adopt a new viewport size: refit every loaded image and settle the strip.
    ///
    /// A dismissed pager only refits; its strip stays where the dismiss slide left it.
    pub fn resize(&mut self, page_size: Size) -> Result<PagerUpdate, PagerError> {
        ensure_page_size(page_size)?;
        self.page_size = page_size;
        for page in &mut self.pages {
            let fitted = page
                .image
                .image()
                .map(|image| fit_image(image.dimensions, page_size))
                .unwrap_or(Size::ZERO);
            page.gestures.resize(page_size, fitted);
        }

        if self.dismissed {
            debug!(target: "pager", "keeping dismissed strip in place on resize");
            return Ok(PagerUpdate::default());
        }

        self.state.move_to_desired_offset(page_size, Offset::ZERO);
        Ok(PagerUpdate {
            strip: Some(Transition::immediate(self.state.offset())),
            ..PagerUpdate::default()
        })
    }

    /// Snapshot of everything the renderer needs for the current frame.
    pub fn frame(&self) -> PagerFrame<'_> {
        let pages = self
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| PageFrame {
                index,
                url: page.url.as_str(),
                origin: Offset::new(self.page_size.width * index as f32, 0.0),
                viewport: self.page_size,
                transform: page.gestures.transform(),
                image: page.image.image(),
            })
            .collect();

        PagerFrame {
            strip_offset: self.state.offset(),
            strip_size: Size::new(
                self.page_size.width * self.state.page_count() as f32,
                self.page_size.height,
            ),
            current_index: self.state.current_index(),
            pages,
        }
    }

    fn apply(&mut self, event: OverDragEvent, update: &mut PagerUpdate) {
        let page_size = self.page_size;
        match event {
            OverDragEvent::Dragging { delta, .. } => {
                self.state.move_to_desired_offset(page_size, delta);
                update.strip = Some(Transition::immediate(self.state.offset()));
            }
            OverDragEvent::Canceled => self.settle(update),
            OverDragEvent::Ended { axis: Axis::Horizontal, predicted_end_translation } => {
                let threshold = page_size.width * self.config.page_turn_fraction;
                let predicted = predicted_end_translation.x;
                let previous_index = self.state.current_index();
                if predicted < -threshold {
                    self.state.scroll_to_next(page_size);
                } else if predicted > threshold {
                    self.state.scroll_to_prev(page_size);
                } else {
                    self.state.move_to_desired_offset(page_size, Offset::ZERO);
                }

                if self.state.current_index() != previous_index {
                    info!(
                        target: "pager",
                        from = previous_index,
                        to = self.state.current_index(),
                        "page changed"
                    );
                }
                update.strip =
                    Some(Transition::animated(self.state.offset(), self.config.page_animation));
            }
            OverDragEvent::Ended { axis: Axis::Vertical, predicted_end_translation } => {
                let threshold = page_size.height * self.config.dismiss_fraction;
                let predicted = predicted_end_translation.y;
                if predicted.abs() > threshold {
                    self.state.invoke_dismiss_transition(page_size, predicted);
                    update.strip =
                        Some(Transition::animated(self.state.offset(), self.config.page_animation));
                    update.dismissed = true;
                    self.dismiss();
                } else {
                    self.state.move_to_desired_offset(page_size, Offset::ZERO);
                    update.strip =
                        Some(Transition::animated(self.state.offset(), self.config.page_animation));
                }
            }
        }
    }

    fn settle(&mut self, update: &mut PagerUpdate) {
        self.state.move_to_desired_offset(self.page_size, Offset::ZERO);
        update.strip =
            Some(Transition::animated(self.state.offset(), self.config.settle_animation));
    }

    fn dismiss(&mut self) {
        self.dismissed = true;
        if let Some(on_dismiss) = self.on_dismiss.take() {
            info!(target: "pager", index = self.state.current_index(), "pager dismissed");
            on_dismiss();
        }
    }

    fn check_index(&self, index: usize) -> Result<(), PagerError> {
        if index < self.pages.len() {
            Ok(())
        } else {
            Err(PagerError::PageOutOfRange { index, page_count: self.pages.len() })
        }
    }
}

fn ensure_page_size(page_size: Size) -> Result<(), PagerError> {
    if page_size.is_drawable() {
        Ok(())
    } else {
        Err(PagerError::InvalidPageSize { width: page_size.width, height: page_size.height })
    }
}
