//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// How a text field's value is entered and shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Key used in change events and on the wire
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: InputType,
    /// Icon identifier (`email`, `user`, `eye`)
    pub icon: Option<&'static str>,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        input_type: InputType,
        icon: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            input_type,
            icon: Some(icon),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new unchecked checkbox
    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            input_type: InputType::Text,
            icon: None,
            value: FieldValue::Checkbox(false),
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(_))
    }

    /// Get the text value (returns empty string for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checked state (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match self.value {
            FieldValue::Checkbox(checked) => checked,
            FieldValue::Text(_) => false,
        }
    }

    /// Replace the text value. No-op on checkboxes.
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Flip the checked state. No-op on text fields.
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Value after appending `c`, without mutating the field
    pub fn with_char(&self, c: char) -> String {
        let mut next = self.as_text().to_string();
        next.push(c);
        next
    }

    /// Value after removing the last character, without mutating the field
    pub fn without_last_char(&self) -> String {
        let mut next = self.as_text().to_string();
        next.pop();
        next
    }

    /// Get the display value for rendering (passwords are masked)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.input_type == InputType::Password => {
                "•".repeat(s.chars().count())
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}
