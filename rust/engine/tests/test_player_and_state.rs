mod helpers;

use flipseven_engine::cards::{ActionKind, Card, ModifierKind};
use flipseven_engine::hand::{HandStatus, PlayerHand, FLIP_SEVEN_CARDS};
use flipseven_engine::player::Player;
use helpers::{numbers, Bot};

fn hand_of(cards: &[Card]) -> PlayerHand {
    let mut h = PlayerHand::new();
    for &c in cards {
        h.add_card(c);
    }
    h
}

#[test]
fn new_hand_is_active_and_empty() {
    let h = PlayerHand::new();
    assert_eq!(h.status(), HandStatus::Active);
    assert_eq!(h.card_count(), 0);
    assert!(!h.has_second_chance());
    assert!(!h.second_chance_used());
}

#[test]
fn terminal_hands_ignore_cards() {
    let finishers: [fn(&mut PlayerHand) -> bool; 2] = [PlayerHand::stay, PlayerHand::freeze];
    for finish in finishers {
        let mut h = hand_of(&numbers(&[3]));
        assert!(finish(&mut h));
        let before = h.clone();
        let outcome = h.add_card(Card::Number(3));
        assert!(!outcome.busted && !outcome.flip7 && outcome.discarded.is_empty());
        assert_eq!(h, before);
        assert!(!h.push_action(ActionKind::Freeze));
        assert_eq!(h, before);
    }

    let mut busted = hand_of(&numbers(&[8, 8]));
    assert_eq!(busted.status(), HandStatus::Busted);
    busted.add_card(Card::Number(1));
    assert_eq!(busted.numbers(), &[8, 8]);
    assert!(!busted.stay(), "terminal status never changes");
    assert_eq!(busted.status(), HandStatus::Busted);
}

#[test]
fn duplicate_without_second_chance_busts_and_stays_visible() {
    let mut h = hand_of(&numbers(&[4, 9]));
    let outcome = h.add_card(Card::Number(4));
    assert!(outcome.busted);
    assert!(!outcome.flip7);
    assert!(outcome.discarded.is_empty());
    assert_eq!(h.status(), HandStatus::Busted);
    assert_eq!(h.numbers(), &[4, 9, 4]);
    assert_eq!(h.number_values().len(), 2);
}

#[test]
fn second_chance_discards_itself_and_the_duplicate() {
    let mut h = hand_of(&[
        Card::Number(4),
        Card::Action(ActionKind::SecondChance),
    ]);
    let outcome = h.add_card(Card::Number(4));
    assert!(!outcome.busted);
    assert_eq!(
        outcome.discarded,
        vec![Card::Action(ActionKind::SecondChance), Card::Number(4)]
    );
    assert_eq!(h.status(), HandStatus::Active);
    assert_eq!(h.numbers(), &[4]);
    assert!(h.actions().is_empty());
    assert!(!h.has_second_chance());
    assert!(h.second_chance_used());

    // spent: the next duplicate busts
    assert!(h.add_card(Card::Number(4)).busted);
}

#[test]
fn flip_seven_counts_every_card_kind() {
    let mut h = hand_of(&numbers(&[1, 2, 3, 4, 5]));
    assert!(!h.add_card(Card::Modifier(ModifierKind::Plus2)).flip7);
    assert_eq!(h.card_count(), FLIP_SEVEN_CARDS - 1);
    let outcome = h.add_card(Card::Action(ActionKind::Freeze));
    assert!(outcome.flip7);
    // the hand is still active; the round decides what happens next
    assert_eq!(h.status(), HandStatus::Active);
}

#[test]
fn bust_is_checked_before_flip_seven() {
    let mut h = hand_of(&numbers(&[1, 2, 3, 4, 5, 6]));
    let outcome = h.add_card(Card::Number(6));
    assert!(outcome.busted);
    assert!(!outcome.flip7);
}

#[test]
fn saved_duplicate_does_not_trigger_flip_seven() {
    let mut h = hand_of(&[
        Card::Number(1),
        Card::Number(2),
        Card::Number(3),
        Card::Number(4),
        Card::Number(5),
        Card::Action(ActionKind::SecondChance),
    ]);
    let outcome = h.add_card(Card::Number(1));
    assert!(!outcome.flip7);
    assert_eq!(h.card_count(), 5);
}

#[test]
fn push_action_reports_threshold() {
    let mut h = hand_of(&numbers(&[1, 2, 3, 4, 5, 6]));
    assert!(h.push_action(ActionKind::FlipThree));
    assert_eq!(h.actions(), &[ActionKind::FlipThree]);
}

#[test]
fn hand_cards_lists_everything_held() {
    let h = hand_of(&[
        Card::Number(2),
        Card::Modifier(ModifierKind::Times2),
        Card::Action(ActionKind::Freeze),
    ]);
    assert_eq!(
        h.cards(),
        vec![
            Card::Number(2),
            Card::Modifier(ModifierKind::Times2),
            Card::Action(ActionKind::Freeze),
        ]
    );
}

#[test]
fn player_banks_and_resets_hand() {
    let mut p = Player::new(3, "zoe", Box::new(Bot::stayer())).with_score(40);
    assert_eq!(p.id(), 3);
    assert_eq!(p.name(), "zoe");
    assert_eq!(p.score(), 40);
    assert_eq!(p.decider_name(), "bot");

    p.hand_mut().add_card(Card::Number(6));
    p.bank(6);
    assert_eq!(p.score(), 46);

    let old = p.reset_hand();
    assert_eq!(old.numbers(), &[6]);
    assert_eq!(p.hand().card_count(), 0);

    let view = p.view();
    assert_eq!(view.id, 3);
    assert_eq!(view.score, 46);
}
