use crate::games::types::{CardFace, SlotSymbol};
use crate::scene::layout::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Animation classes toggled on overlay elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimationClass {
    SpinAnimation,
    CardFlip,
}

impl fmt::Display for AnimationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationClass::SpinAnimation => write!(f, "spin-animation"),
            AnimationClass::CardFlip => write!(f, "card-flip"),
        }
    }
}

/// Reference to an animatable overlay element.
///
/// Handles are only meaningful for the scene generation that issued them;
/// once the scene is rebuilt they resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle {
    pub generation: u64,
    pub index: usize,
}

/// Class list shared by every animatable element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<AnimationClass>);

impl ClassList {
    pub fn add(&mut self, class: AnimationClass) -> bool {
        self.0.insert(class)
    }

    pub fn remove(&mut self, class: AnimationClass) -> bool {
        self.0.remove(&class)
    }

    pub fn contains(&self, class: AnimationClass) -> bool {
        self.0.contains(&class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reel {
    pub rect: Rect,
    pub symbol: SlotSymbol,
    pub classes: ClassList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub rect: Rect,
    /// Static hub drawn on top of the wheel
    pub center_dot: Rect,
    pub classes: ClassList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub rect: Rect,
    pub face: CardFace,
    pub classes: ClassList,
}

/// The element layer stacked above the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Reels(Vec<Reel>),
    Wheel(Wheel),
    Cards(Vec<Card>),
}

impl Overlay {
    /// Number of elements the simulator can animate
    pub fn animatable_count(&self) -> usize {
        match self {
            Overlay::Reels(reels) => reels.len(),
            Overlay::Wheel(_) => 1,
            Overlay::Cards(cards) => cards.len(),
        }
    }

    pub fn classes_mut(&mut self, index: usize) -> Option<&mut ClassList> {
        match self {
            Overlay::Reels(reels) => reels.get_mut(index).map(|r| &mut r.classes),
            Overlay::Wheel(wheel) => (index == 0).then_some(&mut wheel.classes),
            Overlay::Cards(cards) => cards.get_mut(index).map(|c| &mut c.classes),
        }
    }

    pub fn classes(&self, index: usize) -> Option<&ClassList> {
        match self {
            Overlay::Reels(reels) => reels.get(index).map(|r| &r.classes),
            Overlay::Wheel(wheel) => (index == 0).then_some(&wheel.classes),
            Overlay::Cards(cards) => cards.get(index).map(|c| &c.classes),
        }
    }

    /// True while any element carries an animation class
    pub fn is_animating(&self) -> bool {
        (0..self.animatable_count()).any(|i| self.classes(i).map_or(false, |c| !c.is_empty()))
    }
}
