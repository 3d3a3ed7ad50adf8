use slidepick::selection::default_index;
use slidepick::{PickerError, SelectionChanged, SelectionModel};

fn names() -> Vec<&'static str> {
    vec!["Tom", "Lily", "Jack", "Bob", "Alice", "Jessy", "Nancy"]
}

#[test]
fn test_default_index_is_middle_biased() {
    assert_eq!(default_index(1), 0);
    assert_eq!(default_index(2), 1);
    assert_eq!(default_index(3), 1);
    assert_eq!(default_index(6), 2);
    assert_eq!(default_index(7), 3);
    assert_eq!(default_index(8), 3);
}

#[test]
fn test_new_selects_default() {
    let model = SelectionModel::new(names(), None).unwrap();
    assert_eq!(model.selected_index(), 3);
    assert_eq!(*model.selected(), "Bob");
    assert_eq!(model.selected_count(), 1);
}

#[test]
fn test_new_selects_initial() {
    let model = SelectionModel::new(names(), Some(5)).unwrap();
    assert_eq!(model.selected_index(), 5);
    assert!(model.entries()[5].selected);
    assert_eq!(model.selected_count(), 1);
}

#[test]
fn test_out_of_range_initial_uses_default() {
    let model = SelectionModel::new(names(), Some(42)).unwrap();
    assert_eq!(model.selected_index(), 3);
}

#[test]
fn test_empty_items_rejected() {
    let result = SelectionModel::<u8>::new(Vec::new(), None);
    assert!(matches!(result, Err(PickerError::EmptySelection)));
}

#[test]
fn test_on_settle_moves_flag() {
    let mut model = SelectionModel::new(names(), None).unwrap();
    let change = model.on_settle(0).unwrap();

    assert_eq!(change, Some(SelectionChanged { previous: 3, index: 0 }));
    assert!(model.entries()[0].selected);
    assert!(!model.entries()[3].selected);
    assert_eq!(model.selected_count(), 1);
}

#[test]
fn test_on_settle_is_idempotent() {
    let mut model = SelectionModel::new(names(), None).unwrap();
    assert!(model.on_settle(6).unwrap().is_some());
    let before: Vec<bool> = model.entries().iter().map(|e| e.selected).collect();

    assert_eq!(model.on_settle(6).unwrap(), None, "no second event");
    let after: Vec<bool> = model.entries().iter().map(|e| e.selected).collect();
    assert_eq!(before, after);
}

#[test]
fn test_on_settle_out_of_range() {
    let mut model = SelectionModel::new(names(), None).unwrap();
    assert_eq!(
        model.on_settle(7),
        Err(PickerError::IndexOutOfRange { index: 7, len: 7 })
    );
    assert_eq!(model.selected_index(), 3);
}
