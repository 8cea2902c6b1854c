use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::flip_three::{DeckSource, FlipThreeExecutor, RoundProcessor};
use crate::hand::{AddOutcome, HandStatus};
use crate::player::{Decision, Player, PlayerId, PlayerView};
use crate::scoring;
use crate::second_chance;

/// Why a round stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// Every player stayed, busted or was frozen
    NoActivePlayers,
    /// A player reached seven cards
    Flip7Achieved,
    /// A card could not be produced mid-resolution
    Aborted,
}

/// One completed turn of the driving loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub decision: Decision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundResult {
    pub id: PlayerId,
    pub name: String,
    pub status: HandStatus,
    pub cards: Vec<Card>,
    /// Points banked this round
    pub points: u32,
    /// Cumulative score after the round
    pub total_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub dealer: PlayerId,
    pub reason: RoundEndReason,
    pub flip7_player: Option<PlayerId>,
    pub results: Vec<PlayerRoundResult>,
}

/// Everything a finished round hands back to its game.
#[derive(Debug)]
pub struct RoundSummary {
    pub players: Vec<Player>,
    pub deck: Deck,
    pub discard: Vec<Card>,
    pub report: RoundReport,
}

/// A single round: the players, the deck they draw from and who is still in.
///
/// Turn order is fixed when the round is created (dealer first, then the
/// remaining seats in order). `active` only ever holds players whose hand is
/// still [`HandStatus::Active`].
#[derive(Debug)]
pub struct Round {
    number: u32,
    players: Vec<Player>,
    dealer: PlayerId,
    order: Vec<PlayerId>,
    deck: Deck,
    discard: Vec<Card>,
    active: Vec<PlayerId>,
    current: Option<PlayerId>,
    end: Option<RoundEndReason>,
    flip7_player: Option<PlayerId>,
    round_points: Vec<u32>,
    error: Option<GameError>,
}

impl Round {
    pub fn new(
        number: u32,
        mut players: Vec<Player>,
        dealer: PlayerId,
        deck: Deck,
        mut discard: Vec<Card>,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NotEnoughPlayers);
        }
        let start = players
            .iter()
            .position(|p| p.id() == dealer)
            .ok_or(GameError::UnknownPlayer(dealer))?;
        for p in &mut players {
            discard.extend(p.reset_hand().cards());
        }
        let n = players.len();
        let order: Vec<PlayerId> = (0..n).map(|k| players[(start + k) % n].id()).collect();
        tracing::debug!(round = number, dealer, players = n, "round started");
        Ok(Self {
            number,
            round_points: vec![0; n],
            players,
            dealer,
            active: order.clone(),
            current: order.first().copied(),
            order,
            deck,
            discard,
            end: None,
            flip7_player: None,
            error: None,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }
    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }
    /// Full turn order, dealer first.
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }
    /// Players still drawing, in turn order.
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }
    pub fn is_ended(&self) -> bool {
        self.end.is_some()
    }
    pub fn end_reason(&self) -> Option<RoundEndReason> {
        self.end
    }
    pub fn flip7_player(&self) -> Option<PlayerId> {
        self.flip7_player
    }
    /// The failure that aborted the round, if any.
    pub fn error(&self) -> Option<&GameError> {
        self.error.as_ref()
    }

    fn index_of(&self, id: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.index_of(id).map(|idx| &self.players[idx])
    }

    pub fn is_active(&self, id: PlayerId) -> bool {
        self.player(id).map(|p| p.hand().is_active()).unwrap_or(false)
    }

    /// Points `id` has banked so far this round.
    pub fn round_points(&self, id: PlayerId) -> u32 {
        self.index_of(id)
            .map(|idx| self.round_points[idx])
            .unwrap_or(0)
    }

    fn check_turn(&self, id: PlayerId) -> Result<(), GameError> {
        if self.is_ended() {
            return Err(GameError::RoundEnded);
        }
        match self.current {
            Some(expected) if expected == id => Ok(()),
            Some(expected) => Err(GameError::NotPlayersTurn {
                expected,
                actual: id,
            }),
            None => Err(GameError::RoundEnded),
        }
    }

    /// Asks the current player's decision maker for hit or stay and plays it.
    pub fn take_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let id = match self.current {
            Some(id) if !self.is_ended() => id,
            _ => return Err(GameError::RoundEnded),
        };
        let idx = self.index_of(id)?;
        let others: Vec<PlayerView> = self
            .players
            .iter()
            .filter(|p| p.id() != id)
            .map(Player::view)
            .collect();
        let decision = self.players[idx].decide(&self.deck, &others);
        match decision {
            Decision::Stay => {
                self.stay(id)?;
            }
            Decision::Hit => self.hit(id)?,
        }
        Ok(TurnOutcome {
            player: id,
            decision,
        })
    }

    /// Runs turns until the round ends.
    pub fn play_to_end(&mut self) -> Result<RoundEndReason, GameError> {
        while !self.is_ended() {
            self.take_turn()?;
        }
        Ok(self.end.unwrap_or(RoundEndReason::Aborted))
    }

    /// The current player banks their hand and leaves the round.
    pub fn stay(&mut self, id: PlayerId) -> Result<u32, GameError> {
        self.check_turn(id)?;
        let idx = self.index_of(id)?;
        let points = if self.players[idx].hand_mut().stay() {
            self.bank(idx)
        } else {
            0
        };
        tracing::debug!(player = id, points, "stayed");
        self.remove_from_roster(id);
        self.advance_from(id);
        Ok(points)
    }

    /// The current player draws a card and it is applied, resolving any
    /// action it carries before the turn passes on.
    pub fn hit(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.check_turn(id)?;
        let card = match self.draw_card() {
            Ok(c) => c,
            Err(e) => {
                self.abort(&e);
                return Err(e);
            }
        };
        tracing::debug!(player = id, %card, "hit");
        let result = self.apply_card(id, card);
        self.advance_from(id);
        result
    }

    /// Draws from the deck, rebuilding it from the discard pile once when it
    /// runs dry.
    pub fn draw_card(&mut self) -> Result<Card, GameError> {
        match self.deck.draw() {
            Ok(c) => Ok(c),
            Err(GameError::DeckEmpty) => {
                if self.discard.is_empty() {
                    return Err(GameError::DeckExhausted);
                }
                let pile = std::mem::take(&mut self.discard);
                self.deck.reshuffle_from(pile);
                self.deck.draw().map_err(|_| GameError::DeckExhausted)
            }
            Err(e) => Err(e),
        }
    }

    /// Normal card pipeline: Second Chance goes through its resolver, other
    /// actions are recorded then resolved, numbers and modifiers are added.
    /// Cards for an inactive target or an ended round go to the discard pile.
    pub fn apply_card(&mut self, target: PlayerId, card: Card) -> Result<(), GameError> {
        let idx = self.index_of(target)?;
        if self.is_ended() || !self.players[idx].hand().is_active() {
            self.discard.push(card);
            return Ok(());
        }
        match card {
            Card::Action(ActionKind::SecondChance) => {
                second_chance::resolve(self, target)?;
            }
            Card::Action(kind) => {
                let outcome = self.add_to_hand(target, card)?;
                if !outcome.flip7 {
                    self.resolve_action(target, kind)?;
                }
            }
            _ => {
                self.add_to_hand(target, card)?;
            }
        }
        Ok(())
    }

    /// Adds a card through [`crate::hand::PlayerHand::add_card`] and reacts to
    /// busts, saves and Flip 7.
    pub fn add_to_hand(&mut self, id: PlayerId, card: Card) -> Result<AddOutcome, GameError> {
        let idx = self.index_of(id)?;
        let outcome = self.players[idx].hand_mut().add_card(card);
        if !outcome.discarded.is_empty() {
            tracing::debug!(player = id, %card, "second chance spent");
            self.discard.extend(outcome.discarded.iter().copied());
        }
        if outcome.busted {
            tracing::debug!(player = id, %card, "busted");
            self.round_points[idx] = 0;
            self.remove_from_roster(id);
        } else if outcome.flip7 {
            self.flip_seven(idx);
        }
        Ok(outcome)
    }

    /// Records an action card straight into a hand, skipping the bust path.
    ///
    /// Returns `true` when this pushed the hand to Flip 7, which ends the round.
    pub fn push_action(&mut self, id: PlayerId, kind: ActionKind) -> Result<bool, GameError> {
        let idx = self.index_of(id)?;
        let flip7 = self.players[idx].hand_mut().push_action(kind);
        if flip7 {
            self.flip_seven(idx);
        }
        Ok(flip7)
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Resolves an action card `holder` already has in hand.
    pub fn resolve_action(&mut self, holder: PlayerId, kind: ActionKind) -> Result<(), GameError> {
        if self.is_ended() {
            return Ok(());
        }
        let candidates = self.active.clone();
        match kind {
            ActionKind::Freeze => {
                if let Some(target) = self.select_target(holder, kind, &candidates)? {
                    self.freeze(target)?;
                }
            }
            ActionKind::FlipThree => {
                if let Some(target) = self.select_target(holder, kind, &candidates)? {
                    tracing::debug!(holder, target, "flip three");
                    FlipThreeExecutor::execute(
                        self,
                        target,
                        &mut DeckSource,
                        &mut RoundProcessor,
                    )?;
                }
            }
            ActionKind::SecondChance => {}
        }
        Ok(())
    }

    /// Lets `chooser` pick a target from `candidates`. A pick outside the set
    /// falls back to the first candidate. `None` when there are no candidates.
    pub fn select_target(
        &mut self,
        chooser: PlayerId,
        action: ActionKind,
        candidates: &[PlayerId],
    ) -> Result<Option<PlayerId>, GameError> {
        let Some(&fallback) = candidates.first() else {
            return Ok(None);
        };
        let views: Vec<PlayerView> = candidates
            .iter()
            .filter_map(|&c| self.player(c).ok().map(Player::view))
            .collect();
        let idx = self.index_of(chooser)?;
        let chosen = self.players[idx].choose_target(action, &views);
        if candidates.contains(&chosen) {
            return Ok(Some(chosen));
        }
        let err = GameError::InvalidTargetSelection {
            chosen,
            candidates: candidates.to_vec(),
        };
        tracing::warn!(%err, fallback, "target replaced");
        Ok(Some(fallback))
    }

    /// Banks `target`'s hand and takes them out of the round.
    pub fn freeze(&mut self, target: PlayerId) -> Result<u32, GameError> {
        let idx = self.index_of(target)?;
        if !self.players[idx].hand_mut().freeze() {
            return Ok(0);
        }
        let points = self.bank(idx);
        tracing::debug!(player = target, points, "frozen");
        self.remove_from_roster(target);
        Ok(points)
    }

    /// Marks the round aborted after a card could not be produced.
    pub fn abort(&mut self, err: &GameError) {
        tracing::warn!(round = self.number, %err, "round aborted");
        self.error = Some(err.clone());
        self.finish_with(RoundEndReason::Aborted);
    }

    fn bank(&mut self, idx: usize) -> u32 {
        let points = scoring::compute(self.players[idx].hand()).total;
        self.players[idx].bank(points);
        self.round_points[idx] = points;
        points
    }

    fn flip_seven(&mut self, idx: usize) {
        let id = self.players[idx].id();
        self.players[idx].hand_mut().stay();
        let points = self.bank(idx);
        self.flip7_player = Some(id);
        tracing::info!(round = self.number, player = id, points, "flip 7");
        // everyone still drawing banks what they hold
        for other in std::mem::take(&mut self.active) {
            if let Ok(j) = self.index_of(other) {
                if self.players[j].hand_mut().stay() {
                    self.bank(j);
                }
            }
        }
        self.finish_with(RoundEndReason::Flip7Achieved);
    }

    fn remove_from_roster(&mut self, id: PlayerId) {
        self.active.retain(|&p| p != id);
        if self.active.is_empty() && !self.is_ended() {
            self.finish_with(RoundEndReason::NoActivePlayers);
        } else if self.current == Some(id) {
            self.advance_from(id);
        }
    }

    fn finish_with(&mut self, reason: RoundEndReason) {
        if self.end.is_none() {
            tracing::info!(round = self.number, ?reason, "round ended");
            self.end = Some(reason);
        }
        self.active.clear();
        self.current = None;
    }

    fn advance_from(&mut self, id: PlayerId) {
        if self.is_ended() {
            self.current = None;
            return;
        }
        let n = self.order.len();
        let start = self.order.iter().position(|&p| p == id).unwrap_or(0);
        self.current = (1..=n)
            .map(|k| self.order[(start + k) % n])
            .find(|p| self.active.contains(p));
    }

    /// Closes the round: hands go to the discard pile and the players, deck
    /// and pile are handed back.
    pub fn finish(mut self) -> RoundSummary {
        let reason = self.end.unwrap_or(RoundEndReason::Aborted);
        let mut results = Vec::with_capacity(self.players.len());
        for (idx, p) in self.players.iter_mut().enumerate() {
            let hand = p.reset_hand();
            let cards = hand.cards();
            self.discard.extend(cards.iter().copied());
            results.push(PlayerRoundResult {
                id: p.id(),
                name: p.name().to_string(),
                status: hand.status(),
                cards,
                points: self.round_points[idx],
                total_score: p.score(),
            });
        }
        RoundSummary {
            report: RoundReport {
                round: self.number,
                dealer: self.dealer,
                reason,
                flip7_player: self.flip7_player,
                results,
            },
            players: self.players,
            deck: self.deck,
            discard: self.discard,
        }
    }
}
