use fivedraw_engine::cards::Face as F;
use fivedraw_engine::rank::{HAND_SIZE, INVALID_STRAIGHT_STARTERS};
use fivedraw_engine::sequence::{
    compare_starters, most_frequent_starter, sequence_including_most_faces, starter_precedence,
    starter_tallies,
};
use std::cmp::Ordering;

#[test]
fn precedence_and_raw_value_disagree_only_on_the_ace() {
    // raw value: Ace is the highest face
    assert_eq!(F::Ace.value(), 14);
    // starter precedence: Ace sits below Two
    assert!(starter_precedence(F::Ace) < starter_precedence(F::Two));
    for face in [F::Two, F::Five, F::Nine, F::King] {
        assert_eq!(starter_precedence(face), face.value());
    }
}

#[test]
fn starter_ordering_places_ace_then_two_then_king() {
    assert_eq!(compare_starters(F::Ace, F::Two), Ordering::Less);
    assert_eq!(compare_starters(F::Two, F::King), Ordering::Less);
    assert_eq!(compare_starters(F::King, F::Ace), Ordering::Greater);
    assert_eq!(compare_starters(F::Nine, F::Nine), Ordering::Equal);
}

#[test]
fn wheel_resolves_to_the_ace_starter() {
    let faces = [F::Ace, F::Two, F::Three, F::Four, F::Five];
    let starter = most_frequent_starter(&faces, HAND_SIZE, &INVALID_STRAIGHT_STARTERS);
    assert_eq!(starter, Some(F::Ace));
}

#[test]
fn broadway_resolves_to_the_ten_starter() {
    let faces = [F::Ten, F::Jack, F::Queen, F::King, F::Ace];
    let starter = most_frequent_starter(&faces, HAND_SIZE, &INVALID_STRAIGHT_STARTERS);
    assert_eq!(starter, Some(F::Ten));
}

#[test]
fn straight_starters_order_wheel_below_six_high_below_broadway() {
    let wheel = most_frequent_starter(
        &[F::Ace, F::Two, F::Three, F::Four, F::Five],
        HAND_SIZE,
        &INVALID_STRAIGHT_STARTERS,
    )
    .unwrap();
    let six_high = most_frequent_starter(
        &[F::Two, F::Three, F::Four, F::Five, F::Six],
        HAND_SIZE,
        &INVALID_STRAIGHT_STARTERS,
    )
    .unwrap();
    let broadway = most_frequent_starter(
        &[F::Ten, F::Jack, F::Queen, F::King, F::Ace],
        HAND_SIZE,
        &INVALID_STRAIGHT_STARTERS,
    )
    .unwrap();

    assert_eq!(compare_starters(wheel, six_high), Ordering::Less);
    assert_eq!(compare_starters(six_high, broadway), Ordering::Less);
}

#[test]
fn tallies_count_distinct_faces_only() {
    // a pair of sevens counts once toward each candidate starter
    let faces = [F::Seven, F::Seven, F::Eight];
    let tallies = starter_tallies(&faces, HAND_SIZE, &[]);
    assert_eq!(tallies.get(&F::Seven), Some(&2)); // covers 7 and 8
    assert_eq!(tallies.get(&F::Eight), Some(&1));
}

#[test]
fn partial_run_targets_the_densest_window() {
    // 4-5-6-7 plus a stray king: the best 5-window is 3..7 or 4..8; the
    // tie resolves toward the higher-precedence starter
    let faces = [F::Four, F::Five, F::Six, F::Seven, F::King];
    let target =
        sequence_including_most_faces(&faces, HAND_SIZE, &INVALID_STRAIGHT_STARTERS);
    assert_eq!(target, vec![F::Four, F::Five, F::Six, F::Seven, F::Eight]);
}
