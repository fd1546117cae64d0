//! Form field value objects

use std::fmt;

/// Character used to mask secret field values
pub const MASK_CHAR: char = '•';

/// Represents a single text input with its label and interaction state
#[derive(Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// Hint shown while the field is empty and unfocused
    pub placeholder: String,
    value: String,
    /// Secret fields are rendered masked
    pub is_secret: bool,
    /// Set on first change or blur; validation messages stay hidden until then
    pub touched: bool,
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("value", &self.display_value(false))
            .field("is_secret", &self.is_secret)
            .field("touched", &self.touched)
            .finish()
    }
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: String::new(),
            is_secret: false,
            touched: false,
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Get the raw value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value and mark the field touched
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.touched = true;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if self.value.pop().is_some() {
            self.touched = true;
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        if !self.value.is_empty() {
            self.value.clear();
            self.touched = true;
        }
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Back to the freshly mounted state
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }

    /// Get the display value for rendering.
    /// Secret fields are masked unless `reveal` is set.
    pub fn display_value(&self, reveal: bool) -> String {
        if self.is_secret && !reveal {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
