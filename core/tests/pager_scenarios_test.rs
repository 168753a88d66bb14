use std::cell::Cell;
use std::rc::Rc;

use pager_core::{
    GestureInput, ImageDimensions, ImageLoadState, ImagePager, LoadedImage, Offset, PagerConfig,
    PagerOptions, Size,
};

const PAGE: Size = Size::new(300.0, 600.0);

struct Harness {
    pager: ImagePager,
    dismissals: Rc<Cell<u32>>,
}

fn open(initial_index: usize) -> Harness {
    let urls = (0..4).map(|i| format!("https://cdn.example/pages/{i}.jpg"));
    let options = PagerOptions::new(urls, PAGE).with_initial_index(initial_index);
    let dismissals = Rc::new(Cell::new(0));
    let counter = Rc::clone(&dismissals);
    let mut pager =
        ImagePager::new(options, PagerConfig::default(), move || counter.set(counter.get() + 1))
            .expect("valid pager");

    // Images with the page's aspect ratio fill it exactly at scale 1.0.
    for index in 0..4 {
        let image = LoadedImage::new(ImageDimensions { width: 600, height: 1200 }, vec![0u8; 16]);
        pager.image_loaded(index, ImageLoadState::Success(image)).expect("index in range");
    }
    Harness { pager, dismissals }
}

fn swipe(harness: &mut Harness, path: &[(f32, f32)], release: (f32, f32), predicted: (f32, f32)) {
    let index = harness.pager.current_index();
    for &(x, y) in path {
        harness.pager.handle_gesture(index, GestureInput::drag(x, y)).expect("drag");
    }
    let release = GestureInput::release(
        Offset::new(release.0, release.1),
        Offset::new(predicted.0, predicted.1),
    );
    harness.pager.handle_gesture(index, release).expect("release");
}

#[test]
fn fling_left_turns_to_next_page() {
    let mut harness = open(0);
    swipe(&mut harness, &[(-40.0, 0.0), (-120.0, 0.0)], (-200.0, 0.0), (-400.0, 0.0));

    assert_eq!(harness.pager.current_index(), 1);
    assert_eq!(harness.pager.state().offset(), Offset::new(-300.0, 0.0));
    assert_eq!(harness.dismissals.get(), 0);
}

#[test]
fn fling_right_turns_to_previous_page() {
    let mut harness = open(1);
    swipe(&mut harness, &[(50.0, 0.0), (150.0, 0.0)], (220.0, 0.0), (400.0, 0.0));

    assert_eq!(harness.pager.current_index(), 0);
    assert_eq!(harness.pager.state().offset(), Offset::ZERO);
}

#[test]
fn live_drag_previews_the_neighbour() {
    let mut harness = open(2);
    let update = harness.pager.handle_gesture(2, GestureInput::drag(-90.0, 0.0)).unwrap();

    assert_eq!(update.strip.map(|strip| strip.target), Some(Offset::new(-690.0, 0.0)));
    assert_eq!(harness.pager.current_index(), 2);
}

#[test]
fn unzoomed_horizontal_drag_reports_over_drag_immediately() {
    let mut harness = open(0);
    let update = harness.pager.handle_gesture(0, GestureInput::drag(-1.0, 0.0)).unwrap();

    assert_eq!(update.strip.map(|strip| strip.target), Some(Offset::new(-1.0, 0.0)));
    assert_eq!(
        harness.pager.gesture_state(0).unwrap().dragging_over_axis(),
        Some(pager_core::Axis::Horizontal)
    );
}

#[test]
fn strong_vertical_fling_dismisses_once() {
    let mut harness = open(1);
    swipe(&mut harness, &[(0.0, 60.0)], (0.0, 110.0), (0.0, 200.0));

    assert_eq!(harness.dismissals.get(), 1);
    assert!(harness.pager.is_dismissed());
    assert_eq!(harness.pager.state().offset(), Offset::new(-300.0, 200.0));

    // The same gesture again must not fire the callback a second time.
    swipe(&mut harness, &[(0.0, 60.0)], (0.0, 110.0), (0.0, 200.0));
    assert_eq!(harness.dismissals.get(), 1);
}

#[test]
fn upward_fling_also_dismisses() {
    let mut harness = open(0);
    swipe(&mut harness, &[(0.0, -60.0)], (0.0, -90.0), (0.0, -240.0));
    assert_eq!(harness.dismissals.get(), 1);
}

#[test]
fn weak_vertical_fling_snaps_back() {
    let mut harness = open(1);
    swipe(&mut harness, &[(0.0, 40.0)], (0.0, 70.0), (0.0, 100.0));

    assert_eq!(harness.dismissals.get(), 0);
    assert!(!harness.pager.is_dismissed());
    assert_eq!(harness.pager.current_index(), 1);
    assert_eq!(harness.pager.state().offset(), Offset::new(-300.0, 0.0));
}

#[test]
fn vertical_lock_blocks_page_turn() {
    let mut harness = open(1);
    // Locks vertical first, then wanders far to the left before a weak vertical release.
    swipe(&mut harness, &[(0.0, 30.0), (-250.0, 40.0)], (-280.0, 50.0), (-600.0, 90.0));

    assert_eq!(harness.pager.current_index(), 1);
    assert_eq!(harness.dismissals.get(), 0);
    assert_eq!(harness.pager.state().offset(), Offset::new(-300.0, 0.0));
}

#[test]
fn zoomed_page_pans_before_paging() {
    let mut harness = open(1);
    harness.pager.handle_gesture(1, GestureInput::pinch(2.0)).unwrap();
    harness.pager.handle_gesture(1, GestureInput::PinchEnded).unwrap();

    // 75 units of horizontal slack at 2x: the first 150 px of drag only pan.
    let update = harness.pager.handle_gesture(1, GestureInput::drag(-150.0, 0.0)).unwrap();
    assert_eq!(update.strip, None);
    assert_eq!(
        harness.pager.gesture_state(1).unwrap().current_offset(),
        Offset::new(-75.0, 0.0)
    );

    swipe(&mut harness, &[], (-250.0, 0.0), (-500.0, 0.0));
    assert_eq!(harness.pager.current_index(), 2);

    // Zoom is kept on the page that was left.
    assert_eq!(harness.pager.gesture_state(1).unwrap().scale(), 2.0);
}

#[test]
fn last_page_fling_settles_in_place() {
    let mut harness = open(3);
    swipe(&mut harness, &[(-80.0, 0.0)], (-160.0, 0.0), (-420.0, 0.0));

    assert_eq!(harness.pager.current_index(), 3);
    assert_eq!(harness.pager.state().offset(), Offset::new(-900.0, 0.0));
}

#[test]
fn loading_page_is_still_interactive() {
    let options = PagerOptions::new(["a", "b"], PAGE);
    let mut pager = ImagePager::new(options, PagerConfig::default(), || {}).unwrap();
    assert_eq!(pager.pending_images().count(), 2);

    pager.handle_gesture(0, GestureInput::drag(-50.0, 0.0)).unwrap();
    let release = GestureInput::release(Offset::new(-100.0, 0.0), Offset::new(-310.0, 0.0));
    pager.handle_gesture(0, release).unwrap();
    assert_eq!(pager.current_index(), 1);
}
