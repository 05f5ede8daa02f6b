//! Exercises the manual-counting surface the way an interactive host
//! would: cards entered by hand, counts kept in sync, entries undone.

use hilo_engine::cards::Rank;
use hilo_engine::count::{apply_draw, true_count};
use hilo_engine::shoe::Shoe;

#[test]
fn manual_entry_keeps_shoe_and_count_in_sync() {
    let mut shoe = Shoe::new(6);
    let mut running = 0;

    for rank in [Rank::Five, Rank::Six, Rank::King, Rank::Two, Rank::Ace] {
        shoe.consume(rank).unwrap();
        running = apply_draw(running, rank);
    }

    assert_eq!(running, 1);
    assert_eq!(shoe.remaining(), 307);
    assert_eq!(shoe.remaining_of(Rank::King), 23);

    // 307 cards left is just over 5.9 decks; true count stays below 1.
    let tc = true_count(running, &shoe);
    assert!(tc > 0.0 && tc < 1.0);
}

#[test]
fn undoing_an_entry_restores_both_shoe_and_count() {
    let mut shoe = Shoe::new(2);
    let mut running = 0;

    shoe.consume(Rank::Four).unwrap();
    running = apply_draw(running, Rank::Four);
    assert_eq!(running, 1);

    // The host removes the mis-entered card.
    shoe.restore(Rank::Four).unwrap();
    running -= Rank::Four.hi_lo_tag();

    assert_eq!(running, 0);
    assert_eq!(shoe, Shoe::new(2));
}

#[test]
fn penetration_tracks_cards_dealt() {
    let mut shoe = Shoe::new(1);
    for _ in 0..13 {
        shoe.consume(Rank::Seven).ok();
        shoe.consume(Rank::Eight).ok();
    }
    // 8 cards actually left the shoe (4 sevens + 4 eights).
    assert_eq!(shoe.remaining(), 44);
    let expected = 8.0 / 52.0;
    assert!((shoe.penetration() - expected).abs() < 1e-12);
}
