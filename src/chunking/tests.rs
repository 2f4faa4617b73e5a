#![cfg(test)]

use super::*;

#[test]
fn test_even_split() {
    let values = ["a", "b", "c", "d"];

    assert_eq!(
        chunk(&values, 2),
        [&["a", "b"][..], &["c", "d"][..]],
        "An evenly divisible length should produce only full groups."
    );
    assert_eq!(
        chunk(&values, 4),
        [&values[..]],
        "A group size equal to the length should produce a single group."
    );
}

#[test]
fn test_remainder_in_final_group() {
    let values = [1, 2, 3, 4, 5];
    let groups = chunk(&values, 2);

    assert_eq!(groups, [&[1, 2][..], &[3, 4][..], &[5][..]]);
    assert!(
        groups[..groups.len() - 1].iter().all(|group| group.len() == 2),
        "Every group except the last should have exactly the requested length."
    );
    assert_eq!(
        groups.last().map(|group| group.len()),
        Some(values.len() % 2),
        "The final group should hold the remainder."
    );
}

#[test]
fn test_singleton_groups() {
    assert_eq!(
        chunk(&["a", "b", "c"], 1),
        [&["a"][..], &["b"][..], &["c"][..]],
        "A group size of 1 should produce singletons."
    );
}

#[test]
fn test_oversized_group() {
    let values = [1, 2, 3];
    assert_eq!(
        chunk(&values, 10),
        [&values[..]],
        "A group size beyond the length should produce one short group."
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(chunk::<u8>(&[], 3), Vec::<&[u8]>::new(), "Empty input should produce no groups.");
}

#[test]
fn test_flattening_restores_input() {
    let values = [1, 2, 3, 4, 5, 6, 7];

    for size in 1..=8 {
        let flattened: Vec<i32> = chunk(&values, size).concat();
        assert_eq!(
            flattened, values,
            "Concatenating the groups should restore the original sequence."
        );
    }
}

#[test]
fn test_zero_size() {
    assert_eq!(
        try_chunk(&[1, 2, 3], 0),
        Err(ZeroChunkSize),
        "A zero group size should be reported as a typed error."
    );
    assert_eq!(
        try_chunk::<u8>(&[], 0),
        Err(ZeroChunkSize),
        "A zero group size should be rejected even for empty input."
    );
}

#[test]
#[should_panic(expected = "groups of 0")]
fn test_zero_size_panics() {
    chunk(&[1, 2, 3], 0);
}
