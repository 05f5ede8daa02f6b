use crate::cards::Rank;

/// Evaluated total of a hand. `is_soft` is true while at least one ace is
/// still counted as 11.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandValue {
    pub total: u32,
    pub is_soft: bool,
}

/// Evaluates a hand: aces start at 11 and are reduced by 10, one at a
/// time, while the total exceeds 21 and an unreduced ace remains.
pub fn evaluate(cards: &[Rank]) -> HandValue {
    let mut total = 0u32;
    let mut aces = 0u32;

    for &card in cards {
        if card == Rank::Ace {
            aces += 1;
        }
        total += card.point_value();
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        is_soft: aces > 0,
    }
}

/// A blackjack is exactly two cards totalling 21.
pub fn is_blackjack(cards: &[Rank]) -> bool {
    cards.len() == 2 && evaluate(cards).total == 21
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank::*;

    #[test]
    fn pair_of_aces_is_soft_twelve() {
        let v = evaluate(&[Ace, Ace]);
        assert_eq!(v, HandValue { total: 12, is_soft: true });
    }

    #[test]
    fn two_face_cards_are_hard_twenty() {
        let v = evaluate(&[King, Queen]);
        assert_eq!(v, HandValue { total: 20, is_soft: false });
    }

    #[test]
    fn ace_nine_is_soft_twenty() {
        let v = evaluate(&[Ace, Nine]);
        assert_eq!(v, HandValue { total: 20, is_soft: true });
    }

    #[test]
    fn soft_hand_hardens_when_forced_over() {
        // A + 9 + 5: the ace drops to 1, leaving a hard 15.
        let v = evaluate(&[Ace, Nine, Five]);
        assert_eq!(v, HandValue { total: 15, is_soft: false });
    }

    #[test]
    fn multiple_aces_reduce_one_at_a_time() {
        let v = evaluate(&[Ace, Ace, Nine]);
        assert_eq!(v, HandValue { total: 21, is_soft: true });
        let v = evaluate(&[Ace, Ace, Ace, King]);
        assert_eq!(v, HandValue { total: 13, is_soft: false });
    }

    #[test]
    fn blackjack_requires_exactly_two_cards() {
        assert!(is_blackjack(&[Ace, King]));
        assert!(!is_blackjack(&[Seven, Seven, Seven]));
        assert!(!is_blackjack(&[Ten, Nine]));
    }

    #[test]
    fn empty_hand_is_hard_zero() {
        let v = evaluate(&[]);
        assert_eq!(v, HandValue { total: 0, is_soft: false });
    }
}
