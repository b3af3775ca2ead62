//! Presentation roots: the element whose class set reflects the theme.

use std::fmt;

/// A mutable, ordered set of class names.
pub trait PresentationRoot {
    fn has_class(&self, class: &str) -> bool;
    /// Adds `class` if absent. Adding a present class is a no-op.
    fn add_class(&mut self, class: &str);
    /// Removes `class` if present.
    fn remove_class(&mut self, class: &str);

    /// Flips membership of `class`, returning whether it is now present.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

impl<T: PresentationRoot + ?Sized> PresentationRoot for &mut T {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }

    fn toggle_class(&mut self, class: &str) -> bool {
        (**self).toggle_class(class)
    }
}

/// In-memory class list, ordered by insertion like a DOM token list.
///
/// Useful for server-rendered markup (render `class="{list}"` on `<html>`)
/// and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace-separated `class` attribute value, dropping duplicates.
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::new();
        for class in attr.split_whitespace() {
            list.add_class(class);
        }
        list
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl PresentationRoot for ClassList {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut list = ClassList::new();
        list.add_class("dark");
        list.add_class("dark");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = ClassList::parse("antialiased");
        list.remove_class("dark");
        assert_eq!(list.to_string(), "antialiased");
    }

    #[test]
    fn test_toggle_class() {
        let mut list = ClassList::new();
        assert!(list.toggle_class("dark"));
        assert!(list.has_class("dark"));
        assert!(!list.toggle_class("dark"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_and_display_preserve_order() {
        let list = ClassList::parse("  h-full dark  h-full font-sans ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["h-full", "dark", "font-sans"]);
        assert_eq!(list.to_string(), "h-full dark font-sans");
    }
}
