//! The fixed slide sequence
//!
//! A [`Slide`] is a static descriptor: a 0-based id, a tab label and the
//! function that draws it. The deck is defined once in [`slides`] and never
//! mutated; [`crate::nav::SlideController`] only ever holds indices into it.

pub mod content;

use crate::ui::slides::{self, SlideRenderer};

/// Index of the slide that hosts the live demo
pub const PROMPT_SLIDE: usize = 2;

/// Static descriptor for one screen of the presentation
#[derive(Clone, Copy)]
pub struct Slide {
    pub id: usize,
    pub label: &'static str,
    pub renderer: SlideRenderer,
}

impl std::fmt::Debug for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slide")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Slide {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.label == other.label
    }
}

impl Eq for Slide {}

const DECK: [Slide; 6] = [
    Slide { id: 0, label: "Hero", renderer: slides::hero::render },
    Slide { id: 1, label: "Friction", renderer: slides::friction::render },
    Slide { id: PROMPT_SLIDE, label: "Prompt", renderer: slides::prompt::render },
    Slide { id: 3, label: "Logic", renderer: slides::logic::render },
    Slide { id: 4, label: "Escalation", renderer: slides::escalation::render },
    Slide { id: 5, label: "Impact", renderer: slides::impact::render },
];

/// The presentation, in display order
pub fn slides() -> Vec<Slide> {
    DECK.to_vec()
}

/// Check that ids are 0-based, unique and contiguous (id == position)
pub fn is_well_formed(slides: &[Slide]) -> bool {
    !slides.is_empty() && slides.iter().enumerate().all(|(i, s)| s.id == i)
}
