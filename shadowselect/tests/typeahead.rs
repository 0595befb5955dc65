use std::time::Duration;

use shadowdom::{Document, Element, Event, Key, Modifiers, NodeId};
use shadowselect::{ManualClock, SelectConfig, SelectWidget};

/// Apple (selected), Banana, Cherry, mounted with a manual clock.
fn fruit() -> (Document, NodeId, SelectWidget, ManualClock) {
    let mut doc = Document::new();
    let root = doc.root();
    let select = doc.append(root, Element::select()).unwrap();
    for (value, label, selected) in [
        ("apple", "Apple", true),
        ("banana", "Banana", false),
        ("cherry", "Cherry", false),
    ] {
        doc.append(select, Element::option(value, label).selected(selected))
            .unwrap();
    }
    let clock = ManualClock::new();
    let widget = SelectWidget::mount_with_clock(
        &mut doc,
        select,
        SelectConfig::default(),
        Box::new(clock.clone()),
    )
    .unwrap();
    (doc, select, widget, clock)
}

fn type_char(doc: &mut Document, widget: &mut SelectWidget, c: char) {
    let event = Event::Key {
        target: Some(widget.container()),
        key: Key::Char(c),
        modifiers: Modifiers::new(),
    };
    widget.dispatch(doc, &event).unwrap();
}

fn selected_value(widget: &SelectWidget) -> &str {
    &widget.selected_option().unwrap().value
}

#[test]
fn test_single_letter_jumps_to_match() {
    let (mut doc, select, mut widget, _clock) = fruit();

    type_char(&mut doc, &mut widget, 'b');
    assert_eq!(selected_value(&widget), "banana");
    assert_eq!(doc.text_content(widget.label()), "Banana");
    assert_eq!(doc.select_value(select).as_deref(), Some("banana"));
}

#[test]
fn test_match_ignores_case() {
    let (mut doc, _, mut widget, _clock) = fruit();

    type_char(&mut doc, &mut widget, 'C');
    assert_eq!(selected_value(&widget), "cherry");
}

#[test]
fn test_keystrokes_within_debounce_accumulate() {
    let (mut doc, _, mut widget, clock) = fruit();

    type_char(&mut doc, &mut widget, 'a');
    clock.advance(Duration::from_millis(200));
    type_char(&mut doc, &mut widget, 'p');

    assert_eq!(widget.search(), "ap");
    assert_eq!(selected_value(&widget), "apple");
}

#[test]
fn test_buffer_resets_after_idle() {
    let (mut doc, _, mut widget, clock) = fruit();

    type_char(&mut doc, &mut widget, 'a');
    clock.advance(Duration::from_millis(500));
    assert!(widget.tick());
    assert_eq!(widget.search(), "");

    // "p" alone matches nothing, so the selection stays put.
    type_char(&mut doc, &mut widget, 'p');
    assert_eq!(widget.search(), "p");
    assert_eq!(selected_value(&widget), "apple");
}

#[test]
fn test_late_keystroke_starts_fresh_without_tick() {
    let (mut doc, _, mut widget, clock) = fruit();

    type_char(&mut doc, &mut widget, 'b');
    clock.advance(Duration::from_millis(600));
    type_char(&mut doc, &mut widget, 'c');

    assert_eq!(widget.search(), "c");
    assert_eq!(selected_value(&widget), "cherry");
}

#[test]
fn test_each_keystroke_extends_the_window() {
    let (mut doc, _, mut widget, clock) = fruit();

    type_char(&mut doc, &mut widget, 'c');
    clock.advance(Duration::from_millis(400));
    type_char(&mut doc, &mut widget, 'h');
    clock.advance(Duration::from_millis(400));
    assert!(!widget.tick());
    assert_eq!(widget.search(), "ch");

    clock.advance(Duration::from_millis(100));
    assert!(widget.tick());
    assert!(!widget.tick());
}

#[test]
fn test_no_match_keeps_selection() {
    let (mut doc, _, mut widget, _clock) = fruit();

    type_char(&mut doc, &mut widget, 'z');
    assert_eq!(selected_value(&widget), "apple");
    assert_eq!(doc.text_content(widget.label()), "Apple");
}

#[test]
fn test_modified_keys_do_not_search() {
    let (mut doc, _, mut widget, _clock) = fruit();

    let event = Event::Key {
        target: Some(widget.container()),
        key: Key::Char('b'),
        modifiers: Modifiers::ctrl(),
    };
    assert!(widget.dispatch(&mut doc, &event).unwrap().is_empty());
    assert_eq!(widget.search(), "");
    assert_eq!(selected_value(&widget), "apple");
}

#[test]
fn test_custom_debounce() {
    let mut doc = Document::new();
    let root = doc.root();
    let select = doc.append(root, Element::select()).unwrap();
    doc.append(select, Element::option("ab", "Ab").selected(true))
        .unwrap();
    doc.append(select, Element::option("b", "B")).unwrap();
    let clock = ManualClock::new();
    let mut widget = SelectWidget::mount_with_clock(
        &mut doc,
        select,
        SelectConfig::new().debounce(Duration::from_millis(100)),
        Box::new(clock.clone()),
    )
    .unwrap();

    type_char(&mut doc, &mut widget, 'a');
    clock.advance(Duration::from_millis(150));
    type_char(&mut doc, &mut widget, 'b');
    assert_eq!(widget.search(), "b");
    assert_eq!(selected_value(&widget), "b");
}
