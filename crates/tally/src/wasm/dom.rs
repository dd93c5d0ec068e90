//! Mock DOM for browser-shell testing.
//!
//! The shell's complete wiring (dispatch table, display writes, class
//! toggling) runs against these abstractions natively, without
//! `web-sys` or a real browser.

use std::collections::HashMap;

/// A DOM element as the shell observes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the element ID.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks whether the element has a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Input-device events the shell dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press, identified by its `KeyboardEvent.key` value
    KeyPress {
        /// The key that was pressed (e.g. `"7"`, `"Enter"`, `"Backspace"`)
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event.
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event.
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// An id-addressable element store standing in for `document`.
#[derive(Debug, Clone, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
}

impl MockDom {
    /// Creates an empty DOM.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
        }
    }

    /// Inserts an element, keyed by its id.
    pub fn insert(&mut self, element: DomElement) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Looks up an element by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks up an element mutably by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Text content of an element, if it exists.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).map(|e| e.text_content.as_str())
    }

    /// Sets the text content of an element; missing ids are ignored.
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.get_mut(id) {
            element.set_text(text);
        }
    }

    /// Adds a class to an element; missing ids are ignored.
    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.add_class(class);
        }
    }

    /// Removes a class from an element; missing ids are ignored.
    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.remove_class(class);
        }
    }

    /// Checks whether an element has a class.
    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    /// Number of elements in the DOM.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the DOM holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
