//! Session controller: game selector, outcome simulator and reset
//!
//! All mutation happens on the caller's thread. Animations are scheduled on a
//! virtual-clock [`Timeline`] and replayed by [`CasinoController::advance`],
//! so reels and cards stay staggered without nesting callbacks.

use crate::animation::{AnimationBackend, BackendInput, BackendInputs, SceneLoader};
use crate::config::CasinoConfig;
use crate::errors::{BetError, CasinoResult};
use crate::games::draws::DrawSource;
use crate::games::history::RoundHistory;
use crate::games::outcome::{reroll_card, reroll_reel, OutcomeResolver};
use crate::games::types::{ActionKind, GameMode, GameOutcome, RoundRecord};
use crate::scene::{AnimationClass, ElementHandle, Overlay, PlaceholderRenderer, Scene};
use crate::session::SessionState;
use crate::timeline::Timeline;
use crate::ui::bindings::{Bindings, ControlId, Document, CANVAS_CONTAINER};
use crate::ui::events::UiEvent;
use crate::ui::view::ViewModel;
use crate::ui::Notifier;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const INSUFFICIENT_BALANCE_ALERT: &str = "Not enough balance!";

/// Timed steps of a spin, deal or reset
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    AddClass { handle: ElementHandle, class: AnimationClass },
    RemoveClass { handle: ElementHandle, class: AnimationClass },
    /// Swap a card's face to a random one mid-flip
    RevealCard { handle: ElementHandle },
    FinishSpin,
    FinishDeal,
    ReleaseReset,
}

/// What a spin or deal request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Started { round_id: Uuid, bet: u64 },
    /// Another animation was still running
    Ignored,
}

/// What a dispatched UI event did
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Switched { rebuilt: bool },
    Action(ActionStatus),
    /// Bet refused; the alert has already been shown
    Rejected(BetError),
    BetSet(u64),
    Reset,
    /// Click on a control that is currently hidden
    Hidden(ControlId),
}

#[derive(Debug, Clone)]
struct PendingRound {
    round_id: Uuid,
    action: ActionKind,
    game: GameMode,
    bet: u64,
    balance_before: u64,
    reset_mid_round: bool,
}

pub struct CasinoController<B: AnimationBackend, D: DrawSource, N: Notifier> {
    config: CasinoConfig,
    state: SessionState,
    loader: SceneLoader<B>,
    scene: Scene,
    container_size: (f64, f64),
    timeline: Timeline<SessionEvent>,
    resolver: OutcomeResolver,
    draws: D,
    notifier: N,
    inputs: BackendInputs,
    pending: Option<PendingRound>,
    history: RoundHistory,
}

impl<B: AnimationBackend, D: DrawSource, N: Notifier> CasinoController<B, D, N> {
    /// Bind to `document` and load the starting game
    pub fn bind<Doc: Document + ?Sized>(
        document: &Doc,
        config: CasinoConfig,
        backend: B,
        draws: D,
        notifier: N,
    ) -> CasinoResult<Self> {
        config.validate()?;
        let bindings = Bindings::bind(document)?;

        let state = SessionState::new(&config.session);
        let mut loader = SceneLoader::new(backend, CANVAS_CONTAINER, config.surface.clone());
        let (width, height) = bindings.container_size;
        let scene = loader.load(state.current_game, width, height);

        info!(
            game = %state.current_game,
            balance = state.balance,
            "casino session started"
        );

        Ok(Self {
            resolver: OutcomeResolver::new(config.odds.clone()),
            history: RoundHistory::new(config.session.history_capacity),
            config,
            state,
            loader,
            scene,
            container_size: bindings.container_size,
            timeline: Timeline::new(),
            draws,
            notifier,
            inputs: BackendInputs::default(),
            pending: None,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn inputs(&self) -> BackendInputs {
        self.inputs
    }

    /// Due time of the next scheduled step, if any
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timeline.next_due_ms()
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.state, self.scene.displayed())
    }

    /// Catch the clock up to `now_ms`, then dispatch `event`. Anything the
    /// event schedules is timed from `now_ms`.
    pub fn dispatch_at(&mut self, now_ms: u64, event: UiEvent) -> DispatchOutcome {
        self.advance_to(now_ms);
        self.dispatch(event)
    }

    /// Route a user event to its handler
    pub fn dispatch(&mut self, event: UiEvent) -> DispatchOutcome {
        match event {
            UiEvent::BetChanged(text) => DispatchOutcome::BetSet(self.change_bet(&text)),
            UiEvent::Click(control) => {
                if !self.view().is_clickable(control) {
                    debug!(control = %control, "click on hidden control ignored");
                    return DispatchOutcome::Hidden(control);
                }

                if let Some(mode) = control.selected_mode() {
                    return DispatchOutcome::Switched {
                        rebuilt: self.switch_game(mode),
                    };
                }

                let result = match control {
                    ControlId::SpinButton => self.spin(),
                    ControlId::DealButton => self.deal(),
                    _ => {
                        self.reset();
                        return DispatchOutcome::Reset;
                    }
                };

                match result {
                    Ok(status) => DispatchOutcome::Action(status),
                    Err(e) => DispatchOutcome::Rejected(e),
                }
            }
        }
    }

    /// Switch the active game; returns whether the scene was rebuilt
    pub fn switch_game(&mut self, game: GameMode) -> bool {
        if game == self.state.current_game {
            return false;
        }

        info!(from = %self.state.current_game, to = %game, "switching game");
        self.state.current_game = game;
        self.rebuild_scene(game);
        true
    }

    fn rebuild_scene(&mut self, mode: GameMode) {
        let (width, height) = self.container_size;
        self.scene = self.loader.load(mode, width, height);
    }

    /// Commit an edit of the bet field
    pub fn change_bet(&mut self, input: &str) -> u64 {
        let bet = self.state.set_bet_from_input(input, &self.config.session);
        debug!(input, bet, "bet changed");
        bet
    }

    /// Start a spin of the slot machine or roulette wheel
    pub fn spin(&mut self) -> Result<ActionStatus, BetError> {
        let Some(round) = self.begin_round(ActionKind::Spin)? else {
            return Ok(ActionStatus::Ignored);
        };

        let timing = &self.config.timing;
        let handles = self.scene.handles();
        match self.scene.overlay {
            Overlay::Reels(_) => {
                for (i, handle) in handles.into_iter().enumerate() {
                    self.timeline.schedule_in(
                        i as u64 * timing.reel_stagger_ms,
                        SessionEvent::AddClass {
                            handle,
                            class: AnimationClass::SpinAnimation,
                        },
                    );
                }
            }
            Overlay::Wheel(_) => {
                for handle in handles {
                    self.scene.add_class(handle, AnimationClass::SpinAnimation);
                }
            }
            Overlay::Cards(_) => {}
        }

        self.timeline
            .schedule_in(timing.spin_duration_ms, SessionEvent::FinishSpin);

        Ok(ActionStatus::Started {
            round_id: round.round_id,
            bet: round.bet,
        })
    }

    /// Deal a fresh hand of cards
    pub fn deal(&mut self) -> Result<ActionStatus, BetError> {
        let Some(round) = self.begin_round(ActionKind::Deal)? else {
            return Ok(ActionStatus::Ignored);
        };

        let timing = self.config.timing.clone();
        if matches!(self.scene.overlay, Overlay::Cards(_)) {
            for (i, handle) in self.scene.handles().into_iter().enumerate() {
                let start = i as u64 * timing.card_stagger_ms;
                self.timeline.schedule_in(
                    start,
                    SessionEvent::AddClass {
                        handle,
                        class: AnimationClass::CardFlip,
                    },
                );
                self.timeline.schedule_in(
                    start + timing.card_face_swap_ms,
                    SessionEvent::RevealCard { handle },
                );
                self.timeline.schedule_in(
                    start + timing.card_flip_duration_ms,
                    SessionEvent::RemoveClass {
                        handle,
                        class: AnimationClass::CardFlip,
                    },
                );
            }
        } else {
            // No cards on screen: draw the table instead of flipping
            debug!(game = %self.state.current_game, "no cards to flip, drawing card table");
            let generation = self.scene.generation;
            let dims = self.scene.surface.dimensions();
            self.scene = PlaceholderRenderer::render(GameMode::Card, dims, generation);
        }

        self.timeline
            .schedule_in(timing.deal_duration_ms, SessionEvent::FinishDeal);

        Ok(ActionStatus::Started {
            round_id: round.round_id,
            bet: round.bet,
        })
    }

    /// Guard, balance check and bet deduction shared by spin and deal.
    /// `Ok(None)` means an animation is already running.
    fn begin_round(&mut self, action: ActionKind) -> Result<Option<PendingRound>, BetError> {
        if self.state.is_animating {
            debug!(action = %action, "animation in progress, request ignored");
            return Ok(None);
        }

        let balance_before = self.state.balance;
        let bet = match self.state.place_bet() {
            Ok(bet) => bet,
            Err(e) => {
                warn!(action = %action, error = %e, "bet rejected");
                self.notifier.alert(INSUFFICIENT_BALANCE_ALERT);
                return Err(e);
            }
        };

        self.state.is_animating = true;
        self.set_input(BackendInput::Trigger, true);

        let round = PendingRound {
            round_id: Uuid::new_v4(),
            action,
            game: self.state.current_game,
            bet,
            balance_before,
            reset_mid_round: false,
        };
        info!(
            round_id = %round.round_id,
            action = %action,
            game = %round.game,
            bet,
            balance = self.state.balance,
            "round started"
        );

        self.pending = Some(round.clone());
        Ok(Some(round))
    }

    /// Restore balance, last win and bet immediately, even mid-animation
    pub fn reset(&mut self) {
        self.state.reset(&self.config.session);
        if let Some(round) = self.pending.as_mut() {
            round.reset_mid_round = true;
        }
        self.set_input(BackendInput::Reset, true);
        self.timeline
            .schedule_in(self.config.timing.reset_pulse_ms, SessionEvent::ReleaseReset);
        info!(balance = self.state.balance, "session reset");
    }

    fn set_input(&mut self, input: BackendInput, value: bool) {
        self.inputs.set(input, value);
        self.loader.set_input(input, value);
    }

    /// Advance the clock by `ms`, firing every step that comes due
    pub fn advance(&mut self, ms: u64) -> usize {
        let target = self.timeline.now_ms().saturating_add(ms);
        self.advance_to(target)
    }

    /// Fire every step due at or before `target_ms`
    pub fn advance_to(&mut self, target_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(event) = self.timeline.pop_due(target_ms) {
            self.fire(event);
            fired += 1;
        }
        self.timeline.set_now(target_ms);
        fired
    }

    /// Fire every scheduled step regardless of due time
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(event) = self.timeline.pop_due(u64::MAX) {
            self.fire(event);
            fired += 1;
        }
        fired
    }

    fn fire(&mut self, event: SessionEvent) {
        debug!(at_ms = self.timeline.now_ms(), event = ?event, "timeline event");

        match event {
            SessionEvent::AddClass { handle, class } => {
                self.scene.add_class(handle, class);
            }
            SessionEvent::RemoveClass { handle, class } => {
                self.scene.remove_class(handle, class);
            }
            SessionEvent::RevealCard { handle } => {
                let face = reroll_card(&mut self.draws);
                self.scene.set_card_face(handle, face);
            }
            SessionEvent::FinishSpin => {
                self.stop_spin_animation();
                self.settle(ActionKind::Spin);
            }
            SessionEvent::FinishDeal => self.settle(ActionKind::Deal),
            SessionEvent::ReleaseReset => self.set_input(BackendInput::Reset, false),
        }
    }

    /// Stop whatever the current scene has spinning; reels land on random
    /// symbols that play no part in the outcome
    fn stop_spin_animation(&mut self) {
        let handles = self.scene.handles();
        match self.scene.overlay {
            Overlay::Reels(_) => {
                for handle in handles {
                    self.scene.remove_class(handle, AnimationClass::SpinAnimation);
                    let symbol = reroll_reel(&mut self.draws);
                    self.scene.set_reel_symbol(handle, symbol);
                }
            }
            Overlay::Wheel(_) => self.scene.clear_class(AnimationClass::SpinAnimation),
            Overlay::Cards(_) => {}
        }
    }

    fn settle(&mut self, action: ActionKind) {
        self.state.is_animating = false;
        self.set_input(BackendInput::Trigger, false);

        let Some(round) = self.pending.take() else {
            warn!(action = %action, "settle without a pending round");
            return;
        };

        let resolution = self.resolver.resolve(action, round.bet, &mut self.draws);
        self.state.settle(resolution.payout);

        let record = RoundRecord {
            round_id: round.round_id,
            game: round.game,
            action,
            bet: round.bet,
            payout: resolution.payout,
            multiplier: resolution.multiplier,
            outcome: resolution.outcome,
            balance_before: round.balance_before,
            balance_after: self.state.balance,
            reset_mid_round: round.reset_mid_round,
            displayed: self.scene.displayed(),
            settled_at: chrono::Utc::now(),
        };

        match record.outcome {
            GameOutcome::Win => info!(
                round_id = %record.round_id,
                payout = record.payout,
                balance = record.balance_after,
                "round won"
            ),
            GameOutcome::Loss => info!(
                round_id = %record.round_id,
                balance = record.balance_after,
                "round lost"
            ),
        }

        self.history.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::UnavailableBackend;
    use crate::games::draws::ScriptedDraws;
    use crate::games::types::SlotSymbol;
    use crate::ui::{AlertLog, StaticDocument};

    type TestController = CasinoController<UnavailableBackend, ScriptedDraws, AlertLog>;

    fn controller(draws: ScriptedDraws) -> TestController {
        CasinoController::bind(
            &StaticDocument::complete(),
            CasinoConfig::default(),
            UnavailableBackend,
            draws,
            AlertLog::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_reels_start_staggered() {
        let mut c = controller(ScriptedDraws::new([]).with_fallback(0.99));
        c.spin().unwrap();
        let handles = c.scene().handles();

        assert!(!c.scene().has_class(handles[0], AnimationClass::SpinAnimation));
        c.advance(0);
        assert!(c.scene().has_class(handles[0], AnimationClass::SpinAnimation));
        assert!(!c.scene().has_class(handles[1], AnimationClass::SpinAnimation));

        c.advance(200);
        assert!(c.scene().has_class(handles[1], AnimationClass::SpinAnimation));
        assert!(!c.scene().has_class(handles[2], AnimationClass::SpinAnimation));

        c.advance(200);
        assert!(c.scene().has_class(handles[2], AnimationClass::SpinAnimation));
        assert!(c.state().is_animating);
    }

    #[test]
    fn test_spin_settles_after_duration() {
        // three reel rerolls, then a losing outcome draw
        let mut c = controller(ScriptedDraws::new([0.0, 0.2, 0.99, 0.9]));
        c.spin().unwrap();
        assert_eq!(c.state().balance, 990);

        c.advance(2999);
        assert!(c.state().is_animating);

        c.advance(1);
        assert!(!c.state().is_animating);
        assert!(!c.scene().overlay.is_animating());
        assert_eq!(c.state().balance, 990);
        assert_eq!(c.state().last_win, 0);

        match &c.scene().overlay {
            Overlay::Reels(reels) => {
                let symbols: Vec<_> = reels.iter().map(|r| r.symbol).collect();
                assert_eq!(symbols, vec![SlotSymbol::Seven, SlotSymbol::Diamond, SlotSymbol::Bar]);
            }
            other => panic!("unexpected overlay {:?}", other),
        }
    }

    #[test]
    fn test_card_flip_choreography() {
        let mut c = controller(ScriptedDraws::new([]).with_fallback(0.9));
        c.switch_game(GameMode::Card);
        let handles = c.scene().handles();
        c.deal().unwrap();

        c.advance(0);
        assert!(c.scene().has_class(handles[0], AnimationClass::CardFlip));

        c.advance(300);
        // face swapped mid-flip: suit Clubs, value Nine at draw 0.9
        match &c.scene().overlay {
            Overlay::Cards(cards) => assert_eq!(cards[0].face.to_string(), "9♣"),
            other => panic!("unexpected overlay {:?}", other),
        }

        c.advance(100);
        assert!(c.scene().has_class(handles[1], AnimationClass::CardFlip));

        c.advance(800);
        assert!(!c.scene().has_class(handles[0], AnimationClass::CardFlip));
        assert!(c.scene().has_class(handles[2], AnimationClass::CardFlip));

        c.advance(1400);
        assert!(!c.scene().overlay.is_animating());
        assert!(!c.state().is_animating);
    }

    #[test]
    fn test_roulette_wheel_spins_immediately() {
        let mut c = controller(ScriptedDraws::new([]).with_fallback(0.9));
        c.switch_game(GameMode::Roulette);
        c.spin().unwrap();

        assert!(c.scene().overlay.is_animating());
        c.run_until_idle();
        assert!(!c.scene().overlay.is_animating());
    }

    #[test]
    fn test_reset_pulses_backend_input() {
        let mut c = controller(ScriptedDraws::new([]));
        c.reset();
        assert!(c.inputs().reset);
        c.advance(99);
        assert!(c.inputs().reset);
        c.advance(1);
        assert!(!c.inputs().reset);
    }

    #[test]
    fn test_hidden_controls_ignored() {
        let mut c = controller(ScriptedDraws::new([]));
        assert_eq!(
            c.dispatch(UiEvent::Click(ControlId::DealButton)),
            DispatchOutcome::Hidden(ControlId::DealButton)
        );
        assert_eq!(c.state().balance, 1000);
    }

    #[test]
    fn test_deal_without_cards_draws_table() {
        let mut c = controller(ScriptedDraws::new([]).with_fallback(0.9));
        let generation = c.scene().generation;
        c.deal().unwrap();

        assert!(matches!(c.scene().overlay, Overlay::Cards(_)));
        assert_eq!(c.scene().generation, generation);
        assert_eq!(c.state().current_game, GameMode::Slot);
        assert!(!c.scene().overlay.is_animating());
    }
}
