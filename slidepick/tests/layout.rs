use slidepick::{Rect, RowKind, StackLayout};

fn item_top(layout: &StackLayout, index: usize) -> f32 {
    layout
        .rows()
        .iter()
        .find(|row| row.kind == RowKind::Item(index))
        .map(|row| row.rect.y)
        .unwrap()
}

// ============================================================================
// Measurement Tests
// ============================================================================

#[test]
fn test_stack_includes_padding_rows() {
    let layout = StackLayout::for_items(7, 50.0, 3, 200.0, 0.0);
    assert_eq!(layout.rows().len(), 9);
    assert_eq!(layout.stack_height(), 450.0);
    assert_eq!(layout.rows()[0].kind, RowKind::Padding);
    assert_eq!(layout.rows()[8].kind, RowKind::Padding);
    assert_eq!(layout.rows()[1].kind, RowKind::Item(0));
    assert_eq!(layout.rows()[7].kind, RowKind::Item(6));
}

#[test]
fn test_static_shift_and_viewport() {
    let layout = StackLayout::for_items(7, 50.0, 3, 200.0, 0.0);
    assert_eq!(layout.viewport(), Rect::new(0.0, 0.0, 200.0, 150.0));
    assert_eq!(layout.static_shift(), 150.0, "450/2 - round(75)");
    assert_eq!(layout.origin(), -150.0);
    assert_eq!(layout.even_correction(), 0.0);
}

#[test]
fn test_rows_are_contiguous_top_to_bottom() {
    let layout = StackLayout::for_items(5, 40.0, 3, 100.0, -80.0);
    for pair in layout.rows().windows(2) {
        assert_eq!(pair[0].rect.bottom(), pair[1].rect.y);
    }
}

#[test]
fn test_mixed_row_heights_are_summed() {
    let layout = StackLayout::measure(&[50.0, 50.0, 80.0, 50.0], 50.0, 3, 100.0, 0.0);
    assert_eq!(layout.stack_height(), 230.0);
    assert_eq!(layout.rows()[3].rect.y - layout.rows()[2].rect.y, 80.0);
}

// ============================================================================
// Centring Tests
// ============================================================================

#[test]
fn test_zero_offset_centres_first_item() {
    let layout = StackLayout::for_items(7, 50.0, 3, 200.0, 0.0);
    assert_eq!(layout.center_slot(), Rect::new(0.0, 50.0, 200.0, 50.0));
    assert_eq!(item_top(&layout, 0), 50.0);
    assert_eq!(layout.centered_item(), Some(0));
}

#[test]
fn test_anchor_offset_centres_item() {
    for index in 0..7 {
        let offset = -(index as f32) * 50.0;
        let layout = StackLayout::for_items(7, 50.0, 3, 200.0, offset);
        assert_eq!(item_top(&layout, index), layout.center_slot().y);
        assert_eq!(layout.centered_item(), Some(index));
    }
}

#[test]
fn test_five_visible_rows() {
    let layout = StackLayout::for_items(7, 50.0, 5, 200.0, -100.0);
    assert_eq!(layout.center_slot().y, 100.0);
    assert_eq!(item_top(&layout, 2), 100.0);
}

#[test]
fn test_even_visible_count_shifts_half_row() {
    let layout = StackLayout::for_items(7, 50.0, 4, 200.0, -150.0);
    assert_eq!(layout.even_correction(), 25.0);
    assert_eq!(layout.center_slot().y, 50.0);
    assert_eq!(item_top(&layout, 3), 50.0);
}

#[test]
fn test_continuous_offset_translates_stack() {
    let rest = StackLayout::for_items(7, 50.0, 3, 200.0, -150.0);
    let dragged = StackLayout::for_items(7, 50.0, 3, 200.0, -163.0);
    for (a, b) in rest.rows().iter().zip(dragged.rows()) {
        assert_eq!(a.rect.y - b.rect.y, 13.0);
    }
}

// ============================================================================
// Clipping Tests
// ============================================================================

#[test]
fn test_visible_rows_are_clipped() {
    let layout = StackLayout::for_items(7, 50.0, 3, 200.0, -170.0);
    let visible: Vec<_> = layout.visible_rows().collect();

    assert_eq!(visible.len(), 4, "partial rows at both edges");
    let (first, clip) = visible[0];
    assert_eq!(first.kind, RowKind::Item(2));
    assert_eq!(clip.y, 0.0);
    assert_eq!(clip.height, 30.0);
    assert_eq!(layout.rows().len(), 9, "hidden rows stay laid out");
}

#[test]
fn test_fewer_items_than_visible_rows() {
    let layout = StackLayout::for_items(2, 50.0, 7, 100.0, 0.0);
    assert_eq!(layout.rows().len(), 4);
    assert_eq!(item_top(&layout, 0), layout.center_slot().y);
}

#[test]
fn test_single_item_stack() {
    let layout = StackLayout::for_items(1, 50.0, 3, 120.0, 0.0);
    assert_eq!(layout.rows().len(), 3);
    assert_eq!(layout.stack_height(), 150.0);
    assert_eq!(layout.centered_item(), Some(0));

    let kinds: Vec<_> = layout.visible_rows().map(|(row, _)| row.kind).collect();
    assert_eq!(kinds, vec![RowKind::Padding, RowKind::Item(0), RowKind::Padding]);
}

#[test]
fn test_center_horizontally() {
    let row = Rect::new(0.0, 10.0, 100.0, 20.0);
    assert_eq!(row.center_horizontally(40.0), Rect::new(30.0, 10.0, 40.0, 20.0));
    assert_eq!(row.center_horizontally(400.0).width, 100.0);
}
