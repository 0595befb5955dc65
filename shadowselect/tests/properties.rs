use proptest::prelude::*;
use shadowdom::{Document, Element, Event, Key, Modifiers, MouseButton, NodeId};
use shadowselect::{Action, OptionList, OptionRecord, SelectConfig, SelectState, SelectWidget};

const VALUES: [&str; 5] = ["apple", "apricot", "banana", "cherry", "date"];

fn records(doc: &mut Document, selected: usize) -> Vec<OptionRecord> {
    VALUES
        .iter()
        .enumerate()
        .map(|(i, value)| OptionRecord {
            value: value.to_string(),
            label: value.to_uppercase(),
            selected: i == selected,
            source: doc.create(Element::option(*value, *value)),
        })
        .collect()
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(VALUES.to_vec()).prop_map(|v| Action::Select(v.to_string())),
        Just(Action::SelectPrevious),
        Just(Action::SelectNext),
        "[a-e]{1,3}".prop_map(Action::SelectPrefix),
        Just(Action::Open),
        Just(Action::Close),
        Just(Action::Toggle),
    ]
}

#[derive(Debug, Clone)]
enum Input {
    Key(Key),
    ClickLabel,
    ClickRow(usize),
    Blur,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Key(Key::Up)),
        Just(Input::Key(Key::Down)),
        Just(Input::Key(Key::Enter)),
        Just(Input::Key(Key::Escape)),
        Just(Input::Key(Key::Char(' '))),
        prop::char::range('a', 'e').prop_map(|c| Input::Key(Key::Char(c))),
        Just(Input::ClickLabel),
        (0..VALUES.len()).prop_map(Input::ClickRow),
        Just(Input::Blur),
    ]
}

fn to_event(widget: &SelectWidget, input: &Input) -> Event {
    let click = |target: NodeId| Event::Click {
        target: Some(target),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    match input {
        Input::Key(key) => Event::Key {
            target: Some(widget.container()),
            key: *key,
            modifiers: Modifiers::new(),
        },
        Input::ClickLabel => click(widget.label()),
        Input::ClickRow(i) => click(widget.rows()[*i]),
        Input::Blur => Event::Blur {
            target: widget.container(),
            new_target: None,
        },
    }
}

proptest! {
    #[test]
    fn state_keeps_exactly_one_selection(
        start in 0..VALUES.len(),
        actions in prop::collection::vec(action(), 0..40),
    ) {
        let mut doc = Document::new();
        let list = OptionList::new(records(&mut doc, start)).unwrap();
        let mut state = SelectState::new(list);

        for action in actions {
            let before = state.selected_option_index();
            let transition = state.apply(action).unwrap();

            let selected = state.options().iter().filter(|r| r.selected).count();
            prop_assert_eq!(selected, 1);
            match transition.selection {
                Some(change) => {
                    prop_assert_eq!(Some(change.previous), before);
                    prop_assert_eq!(Some(change.current), state.selected_option_index());
                    prop_assert_ne!(change.previous, change.current);
                }
                None => prop_assert_eq!(before, state.selected_option_index()),
            }
        }
    }

    #[test]
    fn widget_stays_in_sync_with_source(
        start in 0..VALUES.len(),
        inputs in prop::collection::vec(input(), 0..40),
    ) {
        let mut doc = Document::new();
        let root = doc.root();
        let select = doc.append(root, Element::select()).unwrap();
        for (i, value) in VALUES.iter().enumerate() {
            doc.append(select, Element::option(*value, value.to_uppercase()).selected(i == start))
                .unwrap();
        }
        let mut widget = SelectWidget::mount(&mut doc, select, SelectConfig::default()).unwrap();

        for input in &inputs {
            let event = to_event(&widget, input);
            widget.dispatch(&mut doc, &event).unwrap();

            let current = widget.selected_option().unwrap().clone();
            prop_assert_eq!(doc.select_value(select), Some(current.value.clone()));
            prop_assert_eq!(doc.text_content(widget.label()), current.label);

            let flagged: Vec<usize> = widget
                .rows()
                .iter()
                .enumerate()
                .filter(|(_, row)| doc.get(**row).unwrap().classes.contains("selected"))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(flagged, vec![widget.selected_option_index().unwrap()]);

            let shown = doc.get(widget.list()).unwrap().classes.contains("show");
            prop_assert_eq!(shown, widget.is_open());
        }
    }
}
