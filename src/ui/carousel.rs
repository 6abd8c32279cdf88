//! Feature screenshot carousel.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
    pub image_ref: &'static str,
    pub alt_text: &'static str,
}

pub const FEATURE_SLIDES: &[Slide] = &[
    Slide {
        title: "UML-to-code connection",
        caption: "Students can design classes visually and immediately see how structure maps to Java source.",
        image_ref: "feature-uml-diagram.svg",
        alt_text: "Placeholder screenshot showing the UML class diagram workspace in Unimozer Next.",
    },
    Slide {
        title: "Java editor in context",
        caption: "Teachers can discuss syntax and design choices while keeping the diagram and code workflows aligned.",
        image_ref: "feature-java-editor.svg",
        alt_text: "Placeholder screenshot showing Java source editor panels in Unimozer Next.",
    },
    Slide {
        title: "Structogram guidance",
        caption: "Algorithm flow can be taught with a structured visual representation before or during code writing.",
        image_ref: "feature-structogram.svg",
        alt_text: "Placeholder screenshot showing structogram view used for algorithm planning.",
    },
    Slide {
        title: "Object bench experiments",
        caption: "Learners can instantiate classes and call methods quickly to understand runtime behavior.",
        image_ref: "feature-object-bench.svg",
        alt_text: "Placeholder screenshot showing object bench and method call interactions.",
    },
];

/// Keys the carousel region reacts to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Previous,
    Next,
    Jump(usize),
    Key(CarouselKey),
}

/// Current slide position within a fixed-length sequence.
///
/// A zero-length carousel ignores every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn reduce(self, event: CarouselEvent) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match event {
            CarouselEvent::Previous | CarouselEvent::Key(CarouselKey::ArrowLeft) => {
                (self.index + self.len - 1) % self.len
            }
            CarouselEvent::Next | CarouselEvent::Key(CarouselKey::ArrowRight) => {
                (self.index + 1) % self.len
            }
            CarouselEvent::Jump(target) if target < self.len => target,
            CarouselEvent::Jump(_) | CarouselEvent::Key(CarouselKey::Other) => self.index,
        };
        Self { index, ..self }
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    pub fn track_offset_percent(&self) -> usize {
        self.index * 100
    }

    /// Live-region text, e.g. `2 / 4 - Java editor in context`.
    pub fn status_line(&self, slides: &[Slide]) -> String {
        let title = slides
            .get(self.index)
            .map(|s| s.title)
            .unwrap_or("Feature preview");
        format!("{} / {} - {}", self.index + 1, self.len, title)
    }
}

/// Accessible label for the dot button that jumps to `index`.
pub fn jump_label(index: usize, slide: &Slide) -> String {
    format!("Jump to slide {}: {}", index + 1, slide.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_back_to_start() {
        let n = FEATURE_SLIDES.len();
        let start = CarouselState::new(n).reduce(CarouselEvent::Jump(2));
        let mut state = start;
        for _ in 0..n {
            state = state.reduce(CarouselEvent::Next);
        }
        assert_eq!(state, start);
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let state = CarouselState::new(4).reduce(CarouselEvent::Previous);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let state = CarouselState::new(4).reduce(CarouselEvent::Jump(3));
        assert_eq!(state.reduce(CarouselEvent::Next).index(), 0);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let state = CarouselState::new(4).reduce(CarouselEvent::Jump(1));
        assert_eq!(state.reduce(CarouselEvent::Jump(4)).index(), 1);
    }

    #[test]
    fn test_arrow_keys() {
        let state = CarouselState::new(4);
        assert_eq!(state.reduce(CarouselEvent::Key(CarouselKey::ArrowRight)).index(), 1);
        assert_eq!(state.reduce(CarouselEvent::Key(CarouselKey::ArrowLeft)).index(), 3);
        assert_eq!(state.reduce(CarouselEvent::Key(CarouselKey::Other)).index(), 0);
    }

    #[test]
    fn test_empty_carousel_ignores_events() {
        let state = CarouselState::new(0);
        assert!(state.is_empty());
        assert_eq!(state.reduce(CarouselEvent::Next), state);
        assert_eq!(state.reduce(CarouselEvent::Previous), state);
    }

    #[test]
    fn test_status_line_and_labels() {
        let state = CarouselState::new(FEATURE_SLIDES.len()).reduce(CarouselEvent::Next);
        assert_eq!(state.status_line(FEATURE_SLIDES), "2 / 4 - Java editor in context");
        assert_eq!(state.track_offset_percent(), 100);
        assert_eq!(
            jump_label(0, &FEATURE_SLIDES[0]),
            "Jump to slide 1: UML-to-code connection"
        );
    }
}
