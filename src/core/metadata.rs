//! Shared diagram metadata
//!
//! Title, description, and accessibility text are common to every diagram
//! type and live beside the type-specific data. The owning database resets
//! this block as part of its own `clear`.

/// Title and accessibility text attached to a diagram
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagramMetadata {
    acc_title: String,
    acc_description: String,
    diagram_title: String,
}

impl DiagramMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accessibility title. Leading whitespace is stripped.
    pub fn set_acc_title(&mut self, title: impl Into<String>) {
        self.acc_title = title.into().trim_start().to_string();
    }

    pub fn acc_title(&self) -> &str {
        &self.acc_title
    }

    /// Set the accessibility description. Leading whitespace is stripped.
    pub fn set_acc_description(&mut self, description: impl Into<String>) {
        self.acc_description = description.into().trim_start().to_string();
    }

    pub fn acc_description(&self) -> &str {
        &self.acc_description
    }

    pub fn set_diagram_title(&mut self, title: impl Into<String>) {
        self.diagram_title = title.into();
    }

    pub fn diagram_title(&self) -> &str {
        &self.diagram_title
    }

    /// Reset all fields to their empty defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let metadata = DiagramMetadata::new();
        assert_eq!(metadata.acc_title(), "");
        assert_eq!(metadata.acc_description(), "");
        assert_eq!(metadata.diagram_title(), "");
    }

    #[test]
    fn test_set_and_get() {
        let mut metadata = DiagramMetadata::new();
        metadata.set_acc_title("Order flow");
        metadata.set_acc_description("Customers place orders");
        metadata.set_diagram_title("Orders");

        assert_eq!(metadata.acc_title(), "Order flow");
        assert_eq!(metadata.acc_description(), "Customers place orders");
        assert_eq!(metadata.diagram_title(), "Orders");
    }

    #[test]
    fn test_acc_fields_strip_leading_whitespace() {
        let mut metadata = DiagramMetadata::new();
        metadata.set_acc_title("   Order flow");
        metadata.set_acc_description("\n  details");
        assert_eq!(metadata.acc_title(), "Order flow");
        assert_eq!(metadata.acc_description(), "details");
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut metadata = DiagramMetadata::new();
        metadata.set_acc_title("a");
        metadata.set_acc_description("b");
        metadata.set_diagram_title("c");

        metadata.clear();
        assert_eq!(metadata, DiagramMetadata::default());
    }
}
