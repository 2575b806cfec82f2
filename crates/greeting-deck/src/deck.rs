//! The greeting card deck and the audio tracks the cards play.

/// Image shown in place of a card picture that fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1627834377411-8da5f4f09de8?auto=format&fit=crop&q=80";

/// Decorative icon drawn over a card's picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Cake,
    PartyPopper,
    Heart,
    Gift,
    Sparkles,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Cake => "\u{1f382}",
            Self::PartyPopper => "\u{1f389}",
            Self::Heart => "\u{2764}\u{fe0f}",
            Self::Gift => "\u{1f381}",
            Self::Sparkles => "\u{2728}",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Cake => "glyph-cake",
            Self::PartyPopper => "glyph-party",
            Self::Heart => "glyph-heart",
            Self::Gift => "glyph-gift",
            Self::Sparkles => "glyph-sparkles",
        }
    }
}

/// Identity of an audio track, independent of where it sits in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(pub u8);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    /// Path relative to the asset directory.
    pub path: &'static str,
}

/// One greeting card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEntry {
    pub icon: Glyph,
    pub title: &'static str,
    pub message: &'static str,
    /// Path relative to the asset directory.
    pub image: &'static str,
    /// Track played when this card is clicked.
    pub track: TrackId,
}

/// Ordered cards plus the tracks they refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardEntry>,
    tracks: Vec<Track>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::birthday()
    }
}

impl Deck {
    /// The five birthday cards, each paired with its own track.
    pub fn birthday() -> Self {
        let tracks = vec![
            Track { id: TrackId(1), path: "happybirthday1.mp3" },
            Track { id: TrackId(2), path: "happybirthday2.mp3" },
            Track { id: TrackId(3), path: "happybirthday3.mp3" },
            Track { id: TrackId(4), path: "happybirthday4.mp3" },
            Track { id: TrackId(5), path: "happybirthday5.mp3" },
        ];

        let cards = vec![
            CardEntry {
                icon: Glyph::Cake,
                title: "Happy Birthday Cosec!",
                message: "May your day be filled with joy and laughter!",
                image: "img1.jpg",
                track: TrackId(1),
            },
            CardEntry {
                icon: Glyph::PartyPopper,
                title: "Make a Wish",
                message: "May all your dreams and wishes come true!",
                image: "img2.jpg",
                track: TrackId(2),
            },
            CardEntry {
                icon: Glyph::Heart,
                title: "Sending Love",
                message: "Wishing you love, health, and happiness!",
                image: "img3.jpg",
                track: TrackId(3),
            },
            CardEntry {
                icon: Glyph::Gift,
                title: "Special Day",
                message: "You deserve all the happiness in the world!",
                image: "img4.jpg",
                track: TrackId(4),
            },
            CardEntry {
                icon: Glyph::Sparkles,
                title: "Shine Bright",
                message: "Keep spreading your light and positivity!",
                image: "img5.jpg",
                track: TrackId(5),
            },
        ];

        Self { cards, tracks }
    }

    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&CardEntry> {
        self.cards.get(index)
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Resolves the track a card plays through its `TrackId`.
    pub fn track_for_card(&self, index: usize) -> Option<&Track> {
        self.card(index).and_then(|card| self.track(card.track))
    }

    /// Track bound when the page mounts.
    pub fn default_track(&self) -> Option<&Track> {
        self.tracks.first()
    }
}
