pub mod class_list;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod scroll;

pub use class_list::ClassList;
pub use document::{Document, NodeId};
pub use element::{Display, Element};
pub use error::DomError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{FocusState, collect_focusable};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{LayoutResult, Rect, layout};
pub use scroll::{scroll_by, scroll_into_view_nearest};
