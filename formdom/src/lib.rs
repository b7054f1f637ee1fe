pub mod document;
pub mod element;
pub mod focus;

pub use document::{Document, Edit};
pub use element::{Content, Element, InputType, SelectOption, Tag};
pub use focus::FocusState;
