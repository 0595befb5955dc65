use std::collections::HashMap;

use crate::class_list::ClassList;

/// Whether an element takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Attributes
    pub attrs: HashMap<String, String>,
    pub classes: ClassList,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: HashMap<String, String>,

    // Content
    pub text: Option<String>,

    // Visual
    pub display: Display,

    // Interaction
    /// Elements with a tab index can hold focus.
    pub tab_index: Option<i32>,
    /// Set on elements that have a click handler attached.
    pub clickable: bool,

    // Form state
    /// Selectedness of an `option` element.
    pub selected: bool,

    // Scrolling
    /// Rows visible at once. `None` means the element grows to fit its children.
    pub viewport_rows: Option<u16>,
    pub scroll_top: usize,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            attrs: HashMap::new(),
            classes: ClassList::new(),
            data: HashMap::new(),
            text: None,
            display: Display::Block,
            tab_index: None,
            clickable: false,
            selected: false,
            viewport_rows: None,
            scroll_top: 0,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new("span").text(text)
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// An `option` with an explicit value attribute and text.
    pub fn option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(text)
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    // Interaction
    pub fn tab_index(mut self, index: i32) -> Self {
        self.tab_index = Some(index);
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(&self) -> bool {
        self.tab_index.is_some_and(|i| i >= 0)
    }

    // Form state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    // Scrolling
    pub fn viewport_rows(mut self, rows: u16) -> Self {
        self.viewport_rows = Some(rows);
        self
    }
}
