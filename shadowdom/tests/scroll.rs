use shadowdom::scroll::find_scroll_container;
use shadowdom::{
    Display, Document, Element, NodeId, Rect, layout, scroll_by, scroll_into_view_nearest,
};

fn list_with_rows(count: usize, viewport: u16) -> (Document, NodeId, Vec<NodeId>) {
    let mut doc = Document::new();
    let root = doc.root();
    let list = doc
        .append(root, Element::new("ul").viewport_rows(viewport))
        .unwrap();
    let rows = (0..count)
        .map(|i| {
            doc.append(list, Element::new("li").text(format!("Row {i}")))
                .unwrap()
        })
        .collect();
    (doc, list, rows)
}

fn scroll_top(doc: &Document, id: NodeId) -> usize {
    doc.get(id).unwrap().scroll_top
}

// ============================================================================
// Nearest-edge scrolling
// ============================================================================

#[test]
fn test_visible_row_does_not_scroll() {
    let (mut doc, list, rows) = list_with_rows(10, 4);
    assert!(!scroll_into_view_nearest(&mut doc, rows[3]).unwrap());
    assert_eq!(scroll_top(&doc, list), 0);
}

#[test]
fn test_row_below_aligns_to_bottom_edge() {
    let (mut doc, list, rows) = list_with_rows(10, 4);
    assert!(scroll_into_view_nearest(&mut doc, rows[6]).unwrap());
    // Row 6 becomes the last visible row: rows 3..=6
    assert_eq!(scroll_top(&doc, list), 3);
}

#[test]
fn test_row_above_aligns_to_top_edge() {
    let (mut doc, list, rows) = list_with_rows(10, 4);
    doc.get_mut(list).unwrap().scroll_top = 5;
    assert!(scroll_into_view_nearest(&mut doc, rows[2]).unwrap());
    assert_eq!(scroll_top(&doc, list), 2);
}

#[test]
fn test_scrolls_inside_hidden_list() {
    let (mut doc, list, rows) = list_with_rows(10, 4);
    doc.get_mut(list).unwrap().display = Display::None;
    assert!(scroll_into_view_nearest(&mut doc, rows[9]).unwrap());
    assert_eq!(scroll_top(&doc, list), 6);
}

#[test]
fn test_no_container_is_noop() {
    let mut doc = Document::new();
    let root = doc.root();
    let lone = doc.append(root, Element::span("x")).unwrap();
    assert_eq!(find_scroll_container(&doc, lone), None);
    assert!(!scroll_into_view_nearest(&mut doc, lone).unwrap());
}

#[test]
fn test_offsets_past_u16_range() {
    let (mut doc, list, rows) = list_with_rows(70_000, 4);

    assert!(scroll_into_view_nearest(&mut doc, rows[69_999]).unwrap());
    assert_eq!(scroll_top(&doc, list), 69_996);

    let result = layout(&doc, Rect::from_size(20, 10));
    assert_eq!(result.get(rows[69_996]).map(|r| r.y), Some(0));
    assert_eq!(result.get(rows[69_999]).map(|r| r.y), Some(3));
    assert_eq!(result.get(rows[0]), None);
    assert_eq!(result.get(list).map(|r| r.height), Some(4));

    assert!(scroll_by(&mut doc, list, -2).unwrap());
    assert_eq!(scroll_top(&doc, list), 69_994);
    assert!(scroll_by(&mut doc, list, 5).unwrap());
    assert_eq!(scroll_top(&doc, list), 69_996);
}

// ============================================================================
// Wheel scrolling
// ============================================================================

#[test]
fn test_scroll_by_clamps_to_content() {
    let (mut doc, list, _) = list_with_rows(6, 4);

    assert!(!scroll_by(&mut doc, list, -3).unwrap());
    assert!(scroll_by(&mut doc, list, 1).unwrap());
    assert_eq!(scroll_top(&doc, list), 1);
    assert!(scroll_by(&mut doc, list, 10).unwrap());
    assert_eq!(scroll_top(&doc, list), 2);
    assert!(!scroll_by(&mut doc, list, 1).unwrap());
}
