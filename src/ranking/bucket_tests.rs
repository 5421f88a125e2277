use crate::ranking::total_bytes;

use super::*;

fn entries(pairs: &[(&str, u64)]) -> Vec<RankedEntry> {
    pairs.iter().map(|(l, b)| RankedEntry::new(*l, *b)).collect()
}

fn four() -> Vec<RankedEntry> {
    entries(&[("Go", 300), ("Python", 100), ("TeX", 50), ("HTML", 10)])
}

#[test]
fn top_two_with_other_bucket() {
    let result = collapse(four(), 2, true);
    assert_eq!(
        result,
        entries(&[("Go", 300), ("Python", 100), ("Other", 60)])
    );
}

#[test]
fn top_two_without_other_drops_tail() {
    let result = collapse(four(), 2, false);
    assert_eq!(result, entries(&[("Go", 300), ("Python", 100)]));
}

#[test]
fn zero_top_passes_through() {
    assert_eq!(collapse(four(), 0, true), four());
}

#[test]
fn top_at_or_above_length_passes_through() {
    assert_eq!(collapse(four(), 4, true), four());
    assert_eq!(collapse(four(), 10, false), four());
}

#[test]
fn zero_byte_tail_adds_no_other() {
    let ranked = entries(&[("Go", 5), ("Empty", 0), ("Blank", 0)]);
    assert_eq!(collapse(ranked, 1, true), entries(&[("Go", 5)]));
}

#[test]
fn other_is_last_even_when_largest() {
    let ranked = entries(&[("Go", 10), ("A", 9), ("B", 9), ("C", 9)]);
    let result = collapse(ranked, 1, true);

    assert_eq!(result.last().unwrap(), &RankedEntry::new(OTHER_LABEL, 27));
    assert_eq!(result[0].language, "Go");
}

#[test]
fn other_bucket_preserves_total_bytes() {
    let before = total_bytes(&four());
    for top in 1..4 {
        let after = collapse(four(), top, true);
        assert_eq!(total_bytes(&after), before, "top = {top}");
        assert_eq!(after.len(), top + 1);
    }
}
