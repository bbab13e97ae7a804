//! Placeholder rendering: drawing surface, overlay elements and layout

pub mod layout;
pub mod surface;
pub mod elements;
pub mod placeholder;

pub use elements::{AnimationClass, ElementHandle, Overlay};
pub use layout::{Dimensions, Rect};
pub use placeholder::PlaceholderRenderer;
pub use surface::{DrawCommand, Surface};

use crate::games::types::{CardFace, DisplayedSymbols, GameMode, SlotSymbol};

/// Everything currently on screen for one game mode
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub mode: GameMode,
    /// Bumped on every rebuild
    pub generation: u64,
    pub surface: Surface,
    pub overlay: Overlay,
}

impl Scene {
    /// Handles for every animatable element, left to right
    pub fn handles(&self) -> Vec<ElementHandle> {
        (0..self.overlay.animatable_count())
            .map(|index| ElementHandle {
                generation: self.generation,
                index,
            })
            .collect()
    }

    fn owns(&self, handle: ElementHandle) -> bool {
        handle.generation == self.generation && handle.index < self.overlay.animatable_count()
    }

    /// Returns false when the handle belongs to a discarded scene
    pub fn add_class(&mut self, handle: ElementHandle, class: AnimationClass) -> bool {
        if !self.owns(handle) {
            return false;
        }
        self.overlay
            .classes_mut(handle.index)
            .map_or(false, |classes| classes.add(class))
    }

    pub fn remove_class(&mut self, handle: ElementHandle, class: AnimationClass) -> bool {
        if !self.owns(handle) {
            return false;
        }
        self.overlay
            .classes_mut(handle.index)
            .map_or(false, |classes| classes.remove(class))
    }

    pub fn has_class(&self, handle: ElementHandle, class: AnimationClass) -> bool {
        self.owns(handle)
            && self
                .overlay
                .classes(handle.index)
                .map_or(false, |classes| classes.contains(class))
    }

    /// Strip `class` from every element of this scene
    pub fn clear_class(&mut self, class: AnimationClass) {
        for index in 0..self.overlay.animatable_count() {
            if let Some(classes) = self.overlay.classes_mut(index) {
                classes.remove(class);
            }
        }
    }

    pub fn set_reel_symbol(&mut self, handle: ElementHandle, symbol: SlotSymbol) -> bool {
        if !self.owns(handle) {
            return false;
        }
        match &mut self.overlay {
            Overlay::Reels(reels) => {
                reels[handle.index].symbol = symbol;
                true
            }
            _ => false,
        }
    }

    pub fn set_card_face(&mut self, handle: ElementHandle, face: CardFace) -> bool {
        if !self.owns(handle) {
            return false;
        }
        match &mut self.overlay {
            Overlay::Cards(cards) => {
                cards[handle.index].face = face;
                true
            }
            _ => false,
        }
    }

    /// What the player currently sees on the overlay
    pub fn displayed(&self) -> DisplayedSymbols {
        match &self.overlay {
            Overlay::Reels(reels) => DisplayedSymbols::Reels {
                symbols: reels.iter().map(|r| r.symbol).collect(),
            },
            Overlay::Wheel(_) => DisplayedSymbols::Wheel,
            Overlay::Cards(cards) => DisplayedSymbols::Cards {
                faces: cards.iter().map(|c| c.face).collect(),
            },
        }
    }
}
