//! Scroll-driven animation math for the landing page.
//!
//! Every function here is a pure mapping from the current scroll offset and
//! viewport to a style value. Nothing is smoothed or batched: the caller
//! recomputes each frame and the last reading wins.
//! - Hero: the video container gains side margins as the page scrolls
//! - Word cloud: words brighten and settle as the section passes through
//! - Decorations: parallax offset proportional to scroll
//! - Reveal: one-shot fade-in-up once an element enters the viewport

use std::time::{Duration, Instant};

use rand::Rng;

/// Current window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Tailwind's `md` breakpoint.
    pub fn is_wide(&self) -> bool {
        self.width >= MD_BREAKPOINT
    }
}

pub const MD_BREAKPOINT: f32 = 768.0;

// ─── Hero ────────────────────────────────────────────────────────────────────

pub const HERO_MARGIN_MIN: f32 = 16.0;
pub const HERO_MARGIN_GROWTH: f32 = 32.0;
/// The hero never grows taller than this share of the viewport.
pub const HERO_MAX_HEIGHT_RATIO: f32 = 0.7;

/// Layout of the hero video container for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    /// 0 at the top of the page, 1 once half a viewport has been scrolled.
    pub progress: f32,
    /// Side margin, applied left and right.
    pub margin: f32,
    pub width: f32,
    pub height: f32,
}

pub fn hero_frame(scroll_y: f32, viewport: Viewport) -> HeroFrame {
    let progress = hero_progress(scroll_y, viewport.height);
    let margin = HERO_MARGIN_MIN + progress * HERO_MARGIN_GROWTH;
    let width = (viewport.width - margin * 2.0).max(0.0);
    let height = (width * 9.0 / 16.0).min(viewport.height * HERO_MAX_HEIGHT_RATIO);
    HeroFrame {
        progress,
        margin,
        width,
        height,
    }
}

fn hero_progress(scroll_y: f32, viewport_height: f32) -> f32 {
    let span = viewport_height * 0.5;
    if span <= 0.0 {
        return if scroll_y > 0.0 { 1.0 } else { 0.0 };
    }
    (scroll_y / span).min(1.0)
}

// ─── Word cloud ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

impl WordStyle {
    /// Style before the section has been measured once.
    pub const RESTING: WordStyle = WordStyle {
        opacity: 0.6,
        translate_y: 0.0,
    };
}

/// How far the viewport has travelled through a section, clamped to 0..=1.
///
/// 0 when the section's top is at the bottom edge of the viewport, 1 when
/// its bottom has left through the top edge.
pub fn section_progress(
    scroll_y: f32,
    section_top: f32,
    section_height: f32,
    viewport_height: f32,
) -> f32 {
    let span = section_height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y - section_top + viewport_height) / span).clamp(0.0, 1.0)
}

pub fn word_style(index: usize, count: usize, progress: f32) -> WordStyle {
    let word_progress = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    let offset = (progress - word_progress) * 100.0;
    WordStyle {
        opacity: (1.0 - offset.abs() / 50.0).clamp(0.3, 1.0),
        translate_y: offset * 0.3,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSize {
    Sm,
    Base,
    Lg,
    Xl,
    Xxl,
}

impl WordSize {
    pub const ALL: [WordSize; 5] = [
        WordSize::Sm,
        WordSize::Base,
        WordSize::Lg,
        WordSize::Xl,
        WordSize::Xxl,
    ];

    pub fn points(self) -> f32 {
        match self {
            WordSize::Sm => 14.0,
            WordSize::Base => 16.0,
            WordSize::Lg => 18.0,
            WordSize::Xl => 20.0,
            WordSize::Xxl => 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWeight {
    Light,
    Normal,
    Medium,
}

impl WordWeight {
    pub const ALL: [WordWeight; 3] = [WordWeight::Light, WordWeight::Normal, WordWeight::Medium];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBucket {
    pub size: WordSize,
    pub weight: WordWeight,
}

/// Pick a size and weight per word, once per mount.
///
/// The index spreads words across buckets and a small random draw jitters
/// them, so two mounts of the same list look different.
pub fn assign_buckets<R: Rng>(count: usize, rng: &mut R) -> Vec<WordBucket> {
    (0..count)
        .map(|index| {
            let size = (index * 7 + rng.random_range(0..3)) % WordSize::ALL.len();
            let weight = (index * 3 + rng.random_range(0..2)) % WordWeight::ALL.len();
            WordBucket {
                size: WordSize::ALL[size],
                weight: WordWeight::ALL[weight],
            }
        })
        .collect()
}

// ─── Floating decorations ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalAnchor {
    /// Percent of the region width from the left edge.
    Left(f32),
    /// Percent of the region width from the right edge.
    Right(f32),
}

/// A static decorative image drifting with the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub id: &'static str,
    /// File name under the `png/` asset folder.
    pub asset: &'static str,
    /// Percent of the region height from its top.
    pub top_pct: f32,
    pub anchor: HorizontalAnchor,
    /// Width below the `md` breakpoint.
    pub width: f32,
    /// Width from the `md` breakpoint up.
    pub width_md: f32,
    /// Parallax multiplier; negative drifts up.
    pub speed: f32,
}

pub const DECORATION_OPACITY: f32 = 0.4;
pub const DECORATION_HOVER_OPACITY: f32 = 0.8;

/// Where a decoration lands inside its region this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge relative to the region.
    pub x: f32,
    /// Top edge relative to the region, parallax included.
    pub y: f32,
    pub width: f32,
}

impl Decoration {
    pub fn offset_y(&self, scroll_y: f32) -> f32 {
        scroll_y * self.speed
    }

    pub fn width_for(&self, viewport: Viewport) -> f32 {
        if viewport.is_wide() {
            self.width_md
        } else {
            self.width
        }
    }

    pub fn place(
        &self,
        region_width: f32,
        region_height: f32,
        scroll_y: f32,
        viewport: Viewport,
    ) -> Placement {
        let width = self.width_for(viewport);
        let x = match self.anchor {
            HorizontalAnchor::Left(pct) => region_width * pct / 100.0,
            HorizontalAnchor::Right(pct) => region_width - region_width * pct / 100.0 - width,
        };
        Placement {
            x,
            y: region_height * self.top_pct / 100.0 + self.offset_y(scroll_y),
            width,
        }
    }
}

// ─── Reveal on scroll ────────────────────────────────────────────────────────

/// Fraction of an element (0..=1) inside the viewport.
///
/// `bottom_margin` shrinks the viewport from below, so an element has to
/// travel that much further up before it counts as visible.
pub fn visible_ratio(
    element_top: f32,
    element_height: f32,
    scroll_y: f32,
    viewport_height: f32,
    bottom_margin: f32,
) -> f32 {
    let view_top = scroll_y;
    let view_bottom = scroll_y + viewport_height - bottom_margin;
    if view_bottom <= view_top {
        return 0.0;
    }
    let element_bottom = element_top + element_height;
    if element_height <= 0.0 {
        let inside = element_top >= view_top && element_top <= view_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = element_bottom.min(view_bottom) - element_top.max(view_top);
    (overlap / element_height).clamp(0.0, 1.0)
}

/// Observation settings for one revealed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub threshold: f32,
    pub bottom_margin: f32,
    /// Extra delay before the fade starts.
    pub delay: Duration,
    /// Extra delay per item for staggered groups.
    pub stagger: Duration,
}

impl RevealSpec {
    pub const HERO_COPY: RevealSpec = RevealSpec {
        threshold: 0.1,
        bottom_margin: 50.0,
        delay: Duration::from_millis(300),
        stagger: Duration::ZERO,
    };
    pub const STUDIOS: RevealSpec = RevealSpec {
        threshold: 0.2,
        bottom_margin: 0.0,
        delay: Duration::ZERO,
        stagger: Duration::from_millis(100),
    };
    pub const SECTION: RevealSpec = RevealSpec {
        threshold: 0.3,
        bottom_margin: 0.0,
        delay: Duration::ZERO,
        stagger: Duration::ZERO,
    };
    pub const WORKS: RevealSpec = RevealSpec {
        threshold: 0.2,
        bottom_margin: 100.0,
        delay: Duration::ZERO,
        stagger: Duration::from_millis(150),
    };

    pub fn delay_for(&self, item: usize) -> Duration {
        self.delay + self.stagger * item as u32
    }
}

/// Latches the first moment an element was seen. Never un-reveals.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed_at: Option<Instant>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self { revealed_at: None }
    }

    /// Feed the current visible ratio. Returns true on the frame it latches.
    pub fn observe(&mut self, ratio: f32, threshold: f32, now: Instant) -> bool {
        if self.revealed_at.is_some() {
            return false;
        }
        if ratio > 0.0 && ratio >= threshold {
            self.revealed_at = Some(now);
            return true;
        }
        false
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        self.revealed_at
    }

    /// Current fade for an item of this block.
    pub fn style(&self, spec: &RevealSpec, item: usize, now: Instant) -> RevealStyle {
        match self.revealed_at {
            Some(at) => reveal_style(now.saturating_duration_since(at), spec.delay_for(item)),
            None => RevealStyle::HIDDEN,
        }
    }
}

pub const REVEAL_DURATION: Duration = Duration::from_millis(700);
pub const REVEAL_DISTANCE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_y: REVEAL_DISTANCE,
    };
    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn is_settled(&self) -> bool {
        *self == RevealStyle::SHOWN
    }
}

/// Fade-in-up with an ease-out curve.
pub fn reveal_style(elapsed: Duration, delay: Duration) -> RevealStyle {
    if elapsed < delay {
        return RevealStyle::HIDDEN;
    }
    let t = ((elapsed - delay).as_secs_f32() / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
    if t >= 1.0 {
        return RevealStyle::SHOWN;
    }
    let eased = 1.0 - (1.0 - t).powi(3);
    RevealStyle {
        opacity: eased,
        offset_y: REVEAL_DISTANCE * (1.0 - eased),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn hero_starts_with_minimum_margin() {
        let frame = hero_frame(0.0, Viewport::new(1280.0, 800.0));
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.margin, 16.0);
        assert_eq!(frame.width, 1248.0);
        assert!(close(frame.height, 560.0)); // capped at 70vh
    }

    #[test]
    fn hero_margin_interpolates_and_saturates() {
        let vp = Viewport::new(1000.0, 800.0);
        let half = hero_frame(200.0, vp);
        assert!(close(half.progress, 0.5));
        assert!(close(half.margin, 32.0));
        assert!(close(half.width, 936.0));

        let past = hero_frame(5000.0, vp);
        assert_eq!(past.progress, 1.0);
        assert_eq!(past.margin, 48.0);
    }

    #[test]
    fn hero_height_follows_aspect_on_narrow_windows() {
        let frame = hero_frame(0.0, Viewport::new(400.0, 900.0));
        assert!(close(frame.height, 368.0 * 9.0 / 16.0));
    }

    #[test]
    fn hero_survives_zero_viewport() {
        assert_eq!(hero_frame(0.0, Viewport::new(0.0, 0.0)).progress, 0.0);
        let scrolled = hero_frame(10.0, Viewport::new(0.0, 0.0));
        assert_eq!(scrolled.progress, 1.0);
        assert_eq!(scrolled.width, 0.0);
    }

    #[test]
    fn section_progress_is_clamped() {
        assert_eq!(section_progress(0.0, 2000.0, 600.0, 800.0), 0.0);
        assert_eq!(section_progress(10_000.0, 2000.0, 600.0, 800.0), 1.0);
        assert!(close(section_progress(1900.0, 2000.0, 600.0, 800.0), 0.5));
        assert_eq!(section_progress(10.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn word_at_current_progress_is_fully_opaque() {
        let style = word_style(30, 60, 0.5);
        assert!(close(style.opacity, 1.0));
        assert!(close(style.translate_y, 0.0));
    }

    #[test]
    fn distant_words_bottom_out_at_minimum_opacity() {
        let style = word_style(0, 60, 1.0);
        assert!(close(style.opacity, 0.3));
        assert!(close(style.translate_y, 30.0));

        let ahead = word_style(59, 60, 0.0);
        assert!(close(ahead.opacity, 0.3));
        assert!(ahead.translate_y < 0.0);
    }

    #[test]
    fn word_opacity_falls_off_linearly() {
        // offset = (0.6 - 0.5) * 100 = 10 → 1 - 10/50
        let style = word_style(5, 10, 0.6);
        assert!(close(style.opacity, 0.8));
        assert!(close(style.translate_y, 3.0));
    }

    #[test]
    fn buckets_stay_near_index_pattern() {
        let mut rng = StdRng::seed_from_u64(7);
        let buckets = assign_buckets(59, &mut rng);
        assert_eq!(buckets.len(), 59);
        for (index, bucket) in buckets.iter().enumerate() {
            let size = WordSize::ALL.iter().position(|s| *s == bucket.size).unwrap();
            let weight = WordWeight::ALL.iter().position(|w| *w == bucket.weight).unwrap();
            let size_jitter = (size + 5 - (index * 7) % 5) % 5;
            let weight_jitter = (weight + 3 - (index * 3) % 3) % 3;
            assert!(size_jitter < 3, "size jitter {size_jitter} at {index}");
            assert!(weight_jitter < 2, "weight jitter {weight_jitter} at {index}");
        }
    }

    #[test]
    fn seeded_buckets_repeat() {
        let a = assign_buckets(20, &mut StdRng::seed_from_u64(1));
        let b = assign_buckets(20, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn decoration_parallax_and_anchor() {
        let deco = Decoration {
            id: "1",
            asset: "Artboard1.png",
            top_pct: 10.0,
            anchor: HorizontalAnchor::Right(5.0),
            width: 192.0,
            width_md: 256.0,
            speed: 0.2,
        };
        let wide = Viewport::new(1000.0, 800.0);
        let p = deco.place(1000.0, 4000.0, 500.0, wide);
        assert!(close(p.width, 256.0));
        assert!(close(p.x, 1000.0 - 50.0 - 256.0));
        assert!(close(p.y, 400.0 + 100.0));

        let narrow = Viewport::new(400.0, 800.0);
        let left = Decoration {
            anchor: HorizontalAnchor::Left(10.0),
            speed: -0.1,
            ..deco
        };
        let p = left.place(400.0, 4000.0, 500.0, narrow);
        assert!(close(p.width, 192.0));
        assert!(close(p.x, 40.0));
        assert!(close(p.y, 350.0));
    }

    #[test]
    fn visibility_ratio_and_margin() {
        // Element 100px tall, top at 750, viewport 0..800
        assert!(close(visible_ratio(750.0, 100.0, 0.0, 800.0, 0.0), 0.5));
        // A 50px bottom margin pushes the same element to exactly 0
        assert_eq!(visible_ratio(750.0, 100.0, 0.0, 800.0, 50.0), 0.0);
        assert_eq!(visible_ratio(0.0, 100.0, 0.0, 800.0, 0.0), 1.0);
        assert_eq!(visible_ratio(900.0, 100.0, 0.0, 800.0, 0.0), 0.0);
        assert_eq!(visible_ratio(10.0, 0.0, 0.0, 800.0, 0.0), 1.0);
    }

    #[test]
    fn reveal_latches_once() {
        let start = Instant::now();
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(0.05, 0.1, start));
        assert!(tracker.observe(0.2, 0.1, start));
        assert!(!tracker.observe(0.0, 0.1, start + Duration::from_secs(1)));
        assert_eq!(tracker.revealed_at(), Some(start));
    }

    #[test]
    fn reveal_fades_in_after_stagger() {
        let start = Instant::now();
        let mut tracker = RevealTracker::new();
        assert_eq!(
            tracker.style(&RevealSpec::WORKS, 0, start),
            RevealStyle::HIDDEN
        );
        tracker.observe(1.0, 0.2, start);

        let spec = RevealSpec::WORKS;
        let early = tracker.style(&spec, 2, start + Duration::from_millis(200));
        assert_eq!(early, RevealStyle::HIDDEN);

        let mid = tracker.style(&spec, 0, start + Duration::from_millis(350));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < REVEAL_DISTANCE);

        let done = tracker.style(&spec, 3, start + Duration::from_secs(2));
        assert!(done.is_settled());
    }
}
