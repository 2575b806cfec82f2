//! Carousel geometry and the horizontal scroll model.
//!
//! The deck is rendered three times end to end. The strip is moved by a
//! scroll offset owned here: automatic ticks nudge it forward and snap back to
//! zero at the end, while the arrow buttons start independent glides.

/// How many copies of the deck are laid out in the strip.
pub const REPEAT_COUNT: usize = 3;

/// Card width in CSS pixels.
pub const CARD_WIDTH: f64 = 320.0;

/// Horizontal gap between neighbouring cards.
pub const CARD_GAP: f64 = 32.0;

/// Distance covered by one arrow-button press.
pub const MANUAL_SCROLL_STEP: f64 = 400.0;

/// Distance covered by one automatic tick.
pub const AUTO_SCROLL_STEP: f64 = 1.0;

/// Length of one glide animation.
pub const GLIDE_DURATION_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn signed_step(&self) -> f64 {
        match self {
            Self::Left => -MANUAL_SCROLL_STEP,
            Self::Right => MANUAL_SCROLL_STEP,
        }
    }
}

/// Position of one card in the tripled strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    /// Which copy of the deck this card belongs to.
    pub block: usize,
    /// Index within the original deck.
    pub index: usize,
    /// Position within the whole strip.
    pub flat_index: usize,
}

impl RenderedCard {
    pub fn new(block: usize, index: usize, deck_len: usize) -> Self {
        Self {
            block,
            index,
            flat_index: index + block * deck_len,
        }
    }

    /// Maps a strip position back to the card it copies.
    pub fn from_flat(flat_index: usize, deck_len: usize) -> Self {
        Self {
            block: flat_index / deck_len,
            index: flat_index % deck_len,
            flat_index,
        }
    }

    /// Tilt around the vertical axis in degrees.
    pub fn rotation_deg(&self) -> f64 {
        (self.flat_index as f64 * 0.1).sin() * 10.0
    }

    pub fn transform(&self) -> String {
        format!("perspective(1000px) rotateY({}deg)", self.rotation_deg())
    }
}

/// All cards of the strip, grouped block by block.
pub fn rendered_cards(deck_len: usize) -> Vec<Vec<RenderedCard>> {
    (0..REPEAT_COUNT)
        .map(|block| {
            (0..deck_len)
                .map(|index| RenderedCard::new(block, index, deck_len))
                .collect()
        })
        .collect()
}

/// Full width of the strip for a deck of `deck_len` cards.
pub fn strip_width(deck_len: usize) -> f64 {
    let count = deck_len * REPEAT_COUNT;
    if count == 0 {
        return 0.0;
    }
    count as f64 * CARD_WIDTH + (count - 1) as f64 * CARD_GAP
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One in-flight smooth scroll.
#[derive(Clone, Debug, PartialEq)]
pub struct Glide {
    delta: f64,
    elapsed_ms: u64,
    applied: f64,
}

impl Glide {
    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            delta: direction.signed_step(),
            elapsed_ms: 0,
            applied: 0.0,
        }
    }

    /// Advances the animation and returns the distance to move this frame.
    fn step(&mut self, elapsed_ms: u64) -> f64 {
        self.elapsed_ms = (self.elapsed_ms + elapsed_ms).min(GLIDE_DURATION_MS);
        let progress = self.elapsed_ms as f64 / GLIDE_DURATION_MS as f64;
        let target = self.delta * ease_in_out(progress);
        let movement = target - self.applied;
        self.applied = target;
        movement
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= GLIDE_DURATION_MS
    }
}

/// Scroll state of the card strip.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    offset: f64,
    content_width: f64,
    viewport_width: f64,
    hovering: bool,
    glides: Vec<Glide>,
}

impl Carousel {
    pub fn new(deck_len: usize) -> Self {
        Self {
            offset: 0.0,
            content_width: strip_width(deck_len),
            viewport_width: 0.0,
            hovering: false,
            glides: Vec::new(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width.max(0.0);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Largest reachable offset: scroll width minus visible width.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// One automatic scroll step. Returns whether the offset moved.
    ///
    /// Suppressed entirely while hovering. Reaching the end snaps the strip
    /// back to exactly zero on the same tick.
    pub fn auto_scroll_tick(&mut self) -> bool {
        if self.hovering {
            return false;
        }
        let before = self.offset;
        let max = self.max_offset();
        self.offset = (self.offset + AUTO_SCROLL_STEP).min(max);
        if self.offset >= max {
            self.offset = 0.0;
        }
        self.offset != before
    }

    /// Starts a glide. Glides already running keep going.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        self.glides.push(Glide::new(direction));
    }

    pub fn is_gliding(&self) -> bool {
        !self.glides.is_empty()
    }

    /// Advances every glide by `elapsed_ms` and drops finished ones.
    pub fn advance_glides(&mut self, elapsed_ms: u64) {
        if self.glides.is_empty() {
            return;
        }
        let movement: f64 = self.glides.iter_mut().map(|g| g.step(elapsed_ms)).sum();
        self.offset = (self.offset + movement).clamp(0.0, self.max_offset());
        self.glides.retain(|g| !g.is_finished());
    }

    /// CSS transform placing the strip at the current offset.
    pub fn strip_transform(&self) -> String {
        format!("translateX(-{}px)", self.offset)
    }
}
