use flipseven_engine::cards::{Card, ModifierKind};
use flipseven_engine::hand::PlayerHand;
use flipseven_engine::scoring::{compute, ScoreBreakdown, FLIP_SEVEN_BONUS};

fn hand_of(cards: &[Card]) -> PlayerHand {
    let mut h = PlayerHand::new();
    for &c in cards {
        h.add_card(c);
    }
    h
}

#[test]
fn additive_before_multiplier() {
    let h = hand_of(&[
        Card::Number(5),
        Card::Number(8),
        Card::Number(9),
        Card::Modifier(ModifierKind::Plus4),
        Card::Modifier(ModifierKind::Times2),
    ]);
    assert_eq!(
        compute(&h),
        ScoreBreakdown {
            base_sum: 22,
            additive: 4,
            multiplier: 2,
            bonus: 0,
            total: 52,
        }
    );
}

#[test]
fn modifiers_alone_still_score() {
    let h = hand_of(&[
        Card::Modifier(ModifierKind::Plus10),
        Card::Modifier(ModifierKind::Plus6),
    ]);
    assert_eq!(compute(&h).total, 16);
}

#[test]
fn bonus_is_added_after_doubling() {
    let h = hand_of(&[
        Card::Number(0),
        Card::Number(1),
        Card::Number(2),
        Card::Number(3),
        Card::Number(4),
        Card::Number(5),
        Card::Number(6),
        Card::Modifier(ModifierKind::Times2),
    ]);
    let s = compute(&h);
    assert_eq!(s.bonus, FLIP_SEVEN_BONUS);
    assert_eq!(s.total, 21 * 2 + 15);
}

#[test]
fn no_bonus_below_seven_distinct_numbers() {
    let h = hand_of(&[
        Card::Number(12),
        Card::Number(11),
        Card::Number(10),
        Card::Number(9),
        Card::Number(8),
        Card::Number(7),
        Card::Modifier(ModifierKind::Plus2),
    ]);
    let s = compute(&h);
    assert_eq!(s.bonus, 0);
    assert_eq!(s.total, 57 + 2);
}

#[test]
fn bust_wipes_modifiers_too() {
    let h = hand_of(&[
        Card::Modifier(ModifierKind::Plus10),
        Card::Number(12),
        Card::Number(12),
    ]);
    assert_eq!(compute(&h).total, 0);
}

#[test]
fn empty_hand_scores_zero_with_unit_multiplier() {
    let s = compute(&PlayerHand::new());
    assert_eq!(s.total, 0);
    assert_eq!(s.multiplier, 1);
}

#[test]
fn huge_doubling_stacks_saturate() {
    let mut hand = PlayerHand::new();
    hand.add_card(Card::Number(12));
    for _ in 0..40 {
        hand.add_card(Card::Modifier(ModifierKind::Times2));
    }
    let s = compute(&hand);
    assert_eq!(s.multiplier, u32::MAX);
    assert_eq!(s.total, u32::MAX);

    let mut hand = PlayerHand::new();
    hand.add_card(Card::Number(12));
    for _ in 0..31 {
        hand.add_card(Card::Modifier(ModifierKind::Times2));
    }
    let s = compute(&hand);
    assert_eq!(s.multiplier, 1 << 31);
    assert_eq!(s.total, u32::MAX);
}
