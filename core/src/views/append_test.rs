//! Tests for AppendView

use super::*;
use crate::test_utils::ForwardOnly;
use crate::{count, seq, to_vec};
use pretty_assertions::assert_eq;

#[test]
fn test_append_after_source() {
    let view = AppendView::new(vec![1, 2, 3], 9);
    assert_eq!(view.items().collect::<Vec<_>>(), vec![1, 2, 3, 9]);
    assert_eq!(view.size(), Some(4));
    assert_eq!(view.value(), &9);
}

#[test]
fn test_append_to_empty_source() {
    let view = AppendView::new(Vec::<i32>::new(), 9);
    assert_eq!(view.begin(), AppendCursor::InAppended);
    assert_eq!(view.items().collect::<Vec<_>>(), vec![9]);
    assert_eq!(view.size(), Some(1));
}

#[test]
fn test_cursor_states() {
    let view = AppendView::new(vec![1], 2);
    let mut cursor = view.begin();
    assert_eq!(cursor, AppendCursor::InSource(0));

    view.advance(&mut cursor).unwrap();
    assert_eq!(cursor, AppendCursor::InAppended);
    assert_eq!(view.value_at(&cursor), Ok(2));

    view.advance(&mut cursor).unwrap();
    assert_eq!(cursor, view.end());
    assert_eq!(view.value_at(&cursor), Err(Error::OutOfRange(DEREF_END)));
    assert_eq!(view.advance(&mut cursor), Err(Error::OutOfRange(ADVANCE_END)));
}

#[test]
fn test_begin_cursors_compare_equal() {
    for view in [AppendView::new(Vec::<i32>::new(), 9), AppendView::new(vec![1, 2], 9)] {
        assert_eq!(view.begin(), view.begin());

        let mut left = view.begin();
        let mut right = view.begin();
        while left != view.end() {
            view.advance(&mut left).unwrap();
            view.advance(&mut right).unwrap();
            assert_eq!(left, right);
        }
        assert_eq!(right, view.end());
    }
}

#[test]
fn test_size_overflow_is_unsized() {
    let view = AppendView::new(0u64..u64::MAX, 7);
    assert_eq!(view.size(), None);
    assert!(!view.is_sized());
    assert!(view.is_bidirectional());
    assert_eq!(view.items().size_hint(), (0, None));
    assert_eq!(view.items().take(2).collect::<Vec<_>>(), vec![0, 1]);

    let chunks = seq(0u64..u64::MAX) | crate::append(7) | crate::chunk(3).unwrap();
    assert_eq!(chunks.size(), None);
    assert!(!chunks.is_bidirectional());
}

// ============================================================================
// Reverse traversal
// ============================================================================

#[test]
fn test_reverse_traversal() {
    let view = AppendView::new(vec![1, 2, 3], 9);
    assert_eq!(
        view.rev_items().unwrap().collect::<Vec<_>>(),
        vec![9, 3, 2, 1]
    );

    let mut cursor = view.begin();
    assert_eq!(view.retreat(&mut cursor), Err(Error::OutOfRange(RETREAT_BEGIN)));
}

#[test]
fn test_retreat_from_appended_on_empty_source() {
    let view = AppendView::new(Vec::<i32>::new(), 9);
    let mut cursor = view.end();
    view.retreat(&mut cursor).unwrap();
    assert_eq!(view.value_at(&cursor), Ok(9));
    assert_eq!(view.retreat(&mut cursor), Err(Error::OutOfRange(RETREAT_BEGIN)));
}

#[test]
fn test_forward_only_source() {
    let view = AppendView::new(ForwardOnly(vec![1, 2]), 3);
    assert!(!view.is_bidirectional());
    assert_eq!(view.size(), None);
    assert_eq!(view.items().collect::<Vec<_>>(), vec![1, 2, 3]);

    let mut cursor = view.end();
    assert_eq!(view.retreat(&mut cursor), Err(Error::NotBidirectional));
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_nested_appends() {
    let view = seq(vec![1]) | crate::append(2) | crate::append(3);
    assert_eq!(view.borrowed() | count(), 3);
    assert_eq!(view.rev_items().unwrap().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(view | to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_borrowed_source() {
    let data = vec![String::from("x")];
    let extra = String::from("y");
    let view = seq(&data) | crate::append(&extra);
    assert_eq!(view | to_vec(), vec!["x", "y"]);
    assert_eq!(data.len(), 1);
}
