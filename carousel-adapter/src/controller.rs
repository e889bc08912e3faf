use carousel::{Carousel, CarouselOptions, ScrollEvent, SnapOutcome};

use crate::{Easing, Tween};

/// A framework-neutral controller that wraps a `carousel::Carousel` and animates snapping.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the user drags or momentum moves the content
/// - `on_drag_end` when the user lifts their finger
/// - `tick(now_ms)` each frame, writing the returned offset into the real scroll surface
#[derive(Clone, Debug)]
pub struct Controller<I> {
    carousel: Carousel<I>,
    tween: Option<Tween>,
    snap_duration_ms: u64,
    easing: Easing,
}

impl<I> Controller<I> {
    pub const DEFAULT_SNAP_DURATION_MS: u64 = 300;

    pub fn new(options: CarouselOptions, images: impl IntoIterator<Item = I>) -> Self {
        Self::from_carousel(Carousel::new(options, images))
    }

    pub fn from_carousel(carousel: Carousel<I>) -> Self {
        Self {
            carousel,
            tween: None,
            snap_duration_ms: Self::DEFAULT_SNAP_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.snap_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<I> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<I> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<I> {
        self.carousel
    }

    pub fn scroll_offset(&self) -> f32 {
        self.carousel.scroll_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset the running snap animation will come to rest at.
    pub fn animation_target(&self) -> Option<f32> {
        self.tween.map(|t| t.to)
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            adebug!("Controller: snap animation cancelled");
        }
    }

    /// Call this when the UI reports a user-driven scroll offset change.
    ///
    /// This cancels any active snap animation.
    pub fn on_scroll(&mut self, offset: f32) {
        self.cancel_animation();
        self.carousel.on_scroll(offset);
    }

    /// Call this when a drag gesture ends.
    ///
    /// Updates the page indicator and starts a snap animation towards the centered item.
    /// Returns the snap outcome; `outcome.coarse_offset` is the rewritten deceleration target
    /// for platforms that expect one.
    pub fn on_drag_end(
        &mut self,
        target_offset: f32,
        velocity: f32,
        now_ms: u64,
    ) -> Option<SnapOutcome> {
        let outcome = self.carousel.on_drag_end(target_offset, velocity)?;
        self.start_tween_to_offset(outcome.target_offset, now_ms);
        Some(outcome)
    }

    /// Dispatches a host scroll event to `on_scroll` / `on_drag_end`.
    pub fn handle_event(&mut self, event: ScrollEvent, now_ms: u64) -> Option<SnapOutcome> {
        match event {
            ScrollEvent::Scroll { offset } => {
                self.on_scroll(offset);
                None
            }
            ScrollEvent::DragEnd {
                target_offset,
                velocity,
            } => self.on_drag_end(target_offset, velocity, now_ms),
        }
    }

    /// Starts an animated snap to `page` (e.g. a tap on the page indicator).
    ///
    /// Returns the target offset, or `None` when the page does not exist.
    pub fn start_snap_to_page(&mut self, page: usize, now_ms: u64) -> Option<f32> {
        let outcome = self.carousel.snap_to_page(page)?;
        self.start_tween_to_offset(outcome.target_offset, now_ms);
        Some(outcome.target_offset)
    }

    /// Starts a snap tween from the current offset to `offset`.
    ///
    /// Returns the clamped target offset.
    pub fn start_tween_to_offset(&mut self, offset: f32, now_ms: u64) -> f32 {
        let to = self.carousel.clamp_scroll_offset(offset);
        let from = self.carousel.scroll_offset();
        atrace!(from, to, now_ms, "Controller: start snap animation");
        self.tween = Some(Tween::new(
            from,
            to,
            now_ms,
            self.snap_duration_ms,
            self.easing,
        ));
        to
    }

    /// Advances the snap animation.
    ///
    /// If an animation is active, applies the sampled offset to the carousel (rescaling every
    /// item) and returns it so the adapter can move its scroll surface. Otherwise returns
    /// `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;

        self.carousel.on_scroll(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
            adebug!(
                offset = self.carousel.scroll_offset(),
                page = self.carousel.current_page(),
                "Controller: snap settled"
            );
        }

        Some(self.carousel.scroll_offset())
    }
}
