//! Hand-drawn fallback scenes
//!
//! The background and frame are drawn once onto the surface; everything that
//! moves lives in the overlay.

use crate::games::types::{CardFace, GameMode, SlotSymbol};
use crate::scene::elements::{Card, ClassList, Overlay, Reel, Wheel};
use crate::scene::layout::{CardLayout, Dimensions, RouletteLayout, SlotLayout};
use crate::scene::surface::{Surface, BACKGROUND, FELT, GOLD, PANEL};
use crate::scene::Scene;
use tracing::debug;

pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Build a fresh scene for `mode`
    pub fn render(mode: GameMode, dims: Dimensions, generation: u64) -> Scene {
        let mut surface = Surface::new(dims);
        surface.fill_background(BACKGROUND);

        let overlay = match mode {
            GameMode::Slot => Self::draw_slot_machine(&mut surface, dims),
            GameMode::Roulette => Self::draw_roulette(&mut surface, dims),
            GameMode::Card => Self::draw_card_table(&mut surface, dims),
        };

        debug!(
            game = %mode,
            generation,
            width = dims.width,
            height = dims.height,
            elements = overlay.animatable_count(),
            "placeholder scene built"
        );

        Scene {
            mode,
            generation,
            surface,
            overlay,
        }
    }

    fn draw_slot_machine(surface: &mut Surface, dims: Dimensions) -> Overlay {
        let layout = SlotLayout::compute(dims);

        surface.stroke_rect(layout.frame, GOLD, 5.0);
        surface.title(GameMode::Slot.title(), dims.width / 2.0, dims.title_y());

        let reels = layout
            .reels
            .iter()
            .zip(SlotSymbol::INITIAL)
            .map(|(rect, symbol)| {
                surface.fill_rect(*rect, PANEL);
                Reel {
                    rect: *rect,
                    symbol,
                    classes: ClassList::default(),
                }
            })
            .collect();

        Overlay::Reels(reels)
    }

    fn draw_roulette(surface: &mut Surface, dims: Dimensions) -> Overlay {
        let layout = RouletteLayout::compute(dims);
        let (cx, cy) = layout.center;

        surface.fill_circle(cx, cy, layout.base_radius, PANEL);
        surface.title(GameMode::Roulette.title(), cx, dims.title_y());

        Overlay::Wheel(Wheel {
            rect: layout.wheel,
            center_dot: layout.center_dot,
            classes: ClassList::default(),
        })
    }

    fn draw_card_table(surface: &mut Surface, dims: Dimensions) -> Overlay {
        let layout = CardLayout::compute(dims);

        surface.ellipse(layout.table_center, layout.table_radii, FELT, GOLD, 4.0);
        surface.title(GameMode::Card.title(), dims.width / 2.0, dims.title_y());

        let cards = layout
            .cards
            .iter()
            .zip(CardFace::INITIAL)
            .map(|(rect, face)| Card {
                rect: *rect,
                face,
                classes: ClassList::default(),
            })
            .collect();

        Overlay::Cards(cards)
    }
}
