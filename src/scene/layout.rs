//! Proportional layout of the placeholder scenes
//!
//! All positions derive from the container's measured size; a zero
//! measurement on either axis falls back to the configured default.

use crate::config::SurfaceConfig;
use serde::{Deserialize, Serialize};

pub const REEL_COUNT: usize = 3;
pub const CARD_COUNT: usize = 3;
const REEL_GAP: f64 = 20.0;
const CARD_GAP: f64 = 20.0;
const FRAME_MARGIN: f64 = 20.0;

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Resolve a container measurement, substituting fallbacks for zero axes
    pub fn measure(client_width: f64, client_height: f64, surface: &SurfaceConfig) -> Self {
        let width = if client_width > 0.0 { client_width } else { surface.fallback_width };
        let height = if client_height > 0.0 { client_height } else { surface.fallback_height };
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Baseline of the scene title
    pub fn title_y(&self) -> f64 {
        self.height * 0.1
    }
}

/// Reel columns and the frame around them
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLayout {
    pub frame: Rect,
    pub reels: Vec<Rect>,
}

impl SlotLayout {
    pub fn compute(dims: Dimensions) -> Self {
        let reel_width = dims.width * 0.2;
        let reel_height = dims.height * 0.5;
        let start_x = dims.width * 0.2;
        let start_y = dims.height * 0.25;

        let reels = (0..REEL_COUNT)
            .map(|i| {
                Rect::new(
                    start_x + i as f64 * (reel_width + REEL_GAP),
                    start_y,
                    reel_width,
                    reel_height,
                )
            })
            .collect();

        let frame = Rect::new(
            start_x - FRAME_MARGIN,
            start_y - FRAME_MARGIN,
            REEL_COUNT as f64 * reel_width + 4.0 * FRAME_MARGIN,
            reel_height + 2.0 * FRAME_MARGIN,
        );

        Self { frame, reels }
    }
}

/// Wheel disc, its base ring and the fixed centre dot
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteLayout {
    pub center: (f64, f64),
    pub radius: f64,
    pub base_radius: f64,
    pub wheel: Rect,
    pub center_dot: Rect,
}

impl RouletteLayout {
    pub fn compute(dims: Dimensions) -> Self {
        let (cx, cy) = dims.center();
        let radius = dims.width.min(dims.height) * 0.3;
        let dot = radius * 0.1;

        Self {
            center: (cx, cy),
            radius,
            base_radius: radius + 5.0,
            wheel: Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0),
            center_dot: Rect::new(cx - dot, cy - dot, dot * 2.0, dot * 2.0),
        }
    }
}

/// Felt ellipse and the row of cards on it
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub table_center: (f64, f64),
    pub table_radii: (f64, f64),
    pub cards: Vec<Rect>,
}

impl CardLayout {
    pub fn compute(dims: Dimensions) -> Self {
        let card_width = dims.width * 0.1;
        let card_height = card_width * 1.4;
        let start_x = (dims.width - (CARD_COUNT as f64 * card_width + 2.0 * CARD_GAP)) / 2.0;
        let start_y = dims.height * 0.4;

        let cards = (0..CARD_COUNT)
            .map(|i| {
                Rect::new(
                    start_x + i as f64 * (card_width + CARD_GAP),
                    start_y,
                    card_width,
                    card_height,
                )
            })
            .collect();

        Self {
            table_center: dims.center(),
            table_radii: (dims.width * 0.4, dims.height * 0.3),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Dimensions {
        Dimensions { width: 600.0, height: 400.0 }
    }

    #[test]
    fn test_measure_fallback_per_axis() {
        let surface = SurfaceConfig::default();
        assert_eq!(Dimensions::measure(0.0, 0.0, &surface), dims());
        assert_eq!(
            Dimensions::measure(800.0, 0.0, &surface),
            Dimensions { width: 800.0, height: 400.0 }
        );
    }

    fn assert_rect(actual: Rect, expected: Rect) {
        for (a, e) in [
            (actual.x, expected.x),
            (actual.y, expected.y),
            (actual.width, expected.width),
            (actual.height, expected.height),
        ] {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_slot_layout() {
        let layout = SlotLayout::compute(dims());
        assert_rect(layout.reels[0], Rect::new(120.0, 100.0, 120.0, 200.0));
        assert_rect(layout.reels[1], Rect::new(260.0, 100.0, 120.0, 200.0));
        assert_rect(layout.reels[2], Rect::new(400.0, 100.0, 120.0, 200.0));
        assert_rect(layout.frame, Rect::new(100.0, 80.0, 440.0, 240.0));
    }

    #[test]
    fn test_roulette_layout() {
        let layout = RouletteLayout::compute(dims());
        assert!((layout.radius - 120.0).abs() < 1e-9);
        assert_rect(layout.wheel, Rect::new(180.0, 80.0, 240.0, 240.0));
        assert_rect(layout.center_dot, Rect::new(288.0, 188.0, 24.0, 24.0));
    }

    #[test]
    fn test_card_layout() {
        let layout = CardLayout::compute(dims());
        assert_rect(layout.cards[0], Rect::new(190.0, 160.0, 60.0, 84.0));
        assert_rect(layout.cards[2], Rect::new(350.0, 160.0, 60.0, 84.0));
        assert!((layout.table_radii.0 - 240.0).abs() < 1e-9);
        assert!((layout.table_radii.1 - 120.0).abs() < 1e-9);
    }
}
