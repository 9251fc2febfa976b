use super::*;
use crate::seq;
use crate::test_utils::ForwardOnly;

#[test]
fn test_min_and_max() {
    let data = seq(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    assert_eq!(data.borrowed() | min(), Ok(1));
    assert_eq!(data.borrowed() | max(), Ok(9));
}

#[test]
fn test_empty_sequence_fails() {
    assert_eq!(seq(Vec::<i32>::new()) | min(), Err(Error::EmptySequence));
    assert_eq!(seq(Vec::<i32>::new()) | max(), Err(Error::EmptySequence));
    assert_eq!(
        ForwardOnly(Vec::<i32>::new()) | max_by_key(|x: &i32| -x),
        Err(Error::EmptySequence)
    );
}

#[test]
fn test_first_extremum_wins_ties() {
    let pairs = seq(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
    assert_eq!(pairs.borrowed() | min_by_key(|p: &(i32, char)| p.0), Ok((0, 'b')));
    assert_eq!(pairs.borrowed() | max_by_key(|p: &(i32, char)| p.0), Ok((1, 'a')));
}

#[test]
fn test_by_key_over_references() {
    let words = vec![String::from("plum"), String::from("fig"), String::from("apple")];
    let longest = seq(&words) | max_by_key(|w: &&String| w.len());
    assert_eq!(longest.map(String::as_str), Ok("apple"));
}

#[test]
fn test_single_element() {
    assert_eq!(ForwardOnly(vec![7]) | min(), Ok(7));
    assert_eq!(ForwardOnly(vec![7]) | max(), Ok(7));
}
