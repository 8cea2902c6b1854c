use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Player, PlayerId};
use crate::round::{Round, RoundReport};

/// Cumulative score that ends the game.
pub const WINNING_SCORE: u32 = 200;

/// A session of consecutive rounds, played until someone reaches the target
/// score. The dealer moves one seat after every round.
///
/// While a round is in progress the players, deck and discard pile are owned
/// by that [`Round`] and handed back by [`Game::finish_round`].
///
/// # Examples
///
/// ```
/// use flipseven_engine::cards::ActionKind;
/// use flipseven_engine::deck::Deck;
/// use flipseven_engine::game::Game;
/// use flipseven_engine::hand::PlayerHand;
/// use flipseven_engine::player::{Decision, DecisionMaker, Player, PlayerId, PlayerView};
///
/// struct Cautious;
///
/// impl DecisionMaker for Cautious {
///     fn decide(&mut self, _: &Deck, hand: &PlayerHand, _: u32, _: &[PlayerView]) -> Decision {
///         if hand.card_count() < 2 { Decision::Hit } else { Decision::Stay }
///     }
///     fn choose_target(&mut self, _: ActionKind, c: &[PlayerView], _: PlayerId) -> PlayerId {
///         c[0].id
///     }
///     fn name(&self) -> &str {
///         "cautious"
///     }
/// }
///
/// let players = vec![
///     Player::new(0, "ann", Box::new(Cautious)),
///     Player::new(1, "bob", Box::new(Cautious)),
/// ];
/// let mut game = Game::new(players, 42).unwrap();
/// let report = game.play_round().unwrap();
/// assert_eq!(report.round, 1);
/// assert_eq!(game.dealer(), 1);
/// ```
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    seats: Vec<PlayerId>,
    dealer_index: usize,
    round: Option<Round>,
    deck: Option<Deck>,
    discard: Vec<Card>,
    round_number: u32,
    complete: bool,
    winners: Vec<PlayerId>,
    target_score: u32,
    history: Vec<RoundReport>,
}

impl Game {
    /// Seats `players` in the given order with a deck shuffled from `seed`.
    pub fn new(players: Vec<Player>, seed: u64) -> Result<Self, GameError> {
        Self::with_deck(players, Deck::shuffled(seed))
    }

    /// Like [`Game::new`] with a caller-supplied deck.
    pub fn with_deck(players: Vec<Player>, deck: Deck) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NotEnoughPlayers);
        }
        let seats: Vec<PlayerId> = players.iter().map(Player::id).collect();
        for (i, id) in seats.iter().enumerate() {
            if seats[..i].contains(id) {
                return Err(GameError::DuplicatePlayer(*id));
            }
        }
        Ok(Self {
            players,
            seats,
            dealer_index: 0,
            round: None,
            deck: Some(deck),
            discard: Vec::new(),
            round_number: 0,
            complete: false,
            winners: Vec::new(),
            target_score: WINNING_SCORE,
            history: Vec::new(),
        })
    }

    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target.max(1);
        self
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn players(&self) -> &[Player] {
        match &self.round {
            Some(round) => round.players(),
            None => &self.players,
        }
    }

    pub fn dealer(&self) -> PlayerId {
        self.seats[self.dealer_index]
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// Deals a new round with the current dealer.
    pub fn start_round(&mut self) -> Result<&mut Round, GameError> {
        if self.complete {
            return Err(GameError::GameComplete);
        }
        if self.round.is_some() {
            return Err(GameError::RoundInProgress);
        }
        let deck = self.deck.take().ok_or(GameError::RoundInProgress)?;
        self.round_number += 1;
        let round = Round::new(
            self.round_number,
            std::mem::take(&mut self.players),
            self.dealer(),
            deck,
            std::mem::take(&mut self.discard),
        )?;
        Ok(self.round.insert(round))
    }

    /// Takes back players, deck and discard pile from an ended round, moves
    /// the dealer on and checks for winners.
    pub fn finish_round(&mut self) -> Result<RoundReport, GameError> {
        let round = self.round.take().ok_or(GameError::NoRoundInProgress)?;
        if !round.is_ended() {
            self.round = Some(round);
            return Err(GameError::RoundNotEnded);
        }
        let summary = round.finish();
        self.players = summary.players;
        self.deck = Some(summary.deck);
        self.discard = summary.discard;
        self.dealer_index = (self.dealer_index + 1) % self.seats.len();
        self.history.push(summary.report.clone());

        self.winners = self.determine_winners();
        if !self.winners.is_empty() {
            self.complete = true;
            tracing::info!(winners = ?self.winners, rounds = self.round_number, "game complete");
        }
        Ok(summary.report)
    }

    /// Plays one whole round with the players' decision makers.
    pub fn play_round(&mut self) -> Result<RoundReport, GameError> {
        let outcome = self.start_round()?.play_to_end();
        match outcome {
            Ok(_) => self.finish_round(),
            Err(err) => {
                if self.round.as_ref().is_some_and(Round::is_ended) {
                    self.finish_round()?;
                }
                Err(err)
            }
        }
    }

    /// Plays rounds until the game is won or `max_rounds` have been played.
    pub fn play(&mut self, max_rounds: Option<u32>) -> Result<Vec<PlayerId>, GameError> {
        while !self.complete {
            if max_rounds.is_some_and(|max| self.round_number >= max) {
                break;
            }
            self.play_round()?;
        }
        Ok(self.winners.clone())
    }

    /// Every player tied at the highest score, once that score reaches the
    /// target. Empty before then.
    pub fn determine_winners(&self) -> Vec<PlayerId> {
        let players = self.players();
        let Some(best) = players.iter().map(Player::score).max() else {
            return Vec::new();
        };
        if best < self.target_score {
            return Vec::new();
        }
        players
            .iter()
            .filter(|p| p.score() == best)
            .map(Player::id)
            .collect()
    }
}
