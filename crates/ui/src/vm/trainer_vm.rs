use services::{CardFace, CardFlow, SessionStats};
use storage::DeckOrigin;

pub const START_PROMPT: &str = "Press ✓ to start learning!";
const DONE_TITLE: &str = "All words learned!";
const CLOSED_TITLE: &str = "Progress saved.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSide {
    Prompt,
    Front,
    Back,
    Done,
}

/// Text and styling for the card area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub side: CardSide,
    pub language: String,
    pub word: String,
}

impl CardVm {
    #[must_use]
    pub fn from_face(face: CardFace<'_>) -> Self {
        match face {
            CardFace::Prompt => Self {
                side: CardSide::Prompt,
                language: String::new(),
                word: START_PROMPT.to_string(),
            },
            CardFace::Front { language, word } => Self {
                side: CardSide::Front,
                language: language.to_string(),
                word: word.to_string(),
            },
            CardFace::Back { language, word } => Self {
                side: CardSide::Back,
                language: language.to_string(),
                word: word.to_string(),
            },
            CardFace::Exhausted => Self {
                side: CardSide::Done,
                language: String::new(),
                word: DONE_TITLE.to_string(),
            },
            CardFace::Closed => Self {
                side: CardSide::Done,
                language: String::new(),
                word: CLOSED_TITLE.to_string(),
            },
        }
    }

    #[must_use]
    pub fn from_flow<H>(flow: &CardFlow<H>) -> Self {
        Self::from_face(flow.face())
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.side {
            CardSide::Prompt => "card card--front card--prompt",
            CardSide::Front => "card card--front",
            CardSide::Back => "card card--back",
            CardSide::Done => "card card--done",
        }
    }
}

/// Footer counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusVm {
    pub remaining: usize,
    pub stats: SessionStats,
    pub resumed: bool,
}

impl StatusVm {
    #[must_use]
    pub fn from_flow<H>(flow: &CardFlow<H>) -> Self {
        let session = flow.session();
        Self {
            remaining: session.remaining(),
            stats: session.stats(),
            resumed: session.origin() == DeckOrigin::Resume,
        }
    }

    #[must_use]
    pub fn remaining_label(&self) -> String {
        match self.remaining {
            1 => "1 word left".to_string(),
            n => format!("{n} words left"),
        }
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Learned: {} · Missed: {}",
            self.stats.learned, self.stats.missed
        )
    }

    #[must_use]
    pub fn source_label(&self) -> &'static str {
        if self.resumed {
            "Resumed from last session"
        } else {
            "Full word list"
        }
    }
}
