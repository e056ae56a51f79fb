use std::collections::BTreeSet;
use std::fmt;

/// Something holding a set of CSS classes.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;

    fn set(&mut self, class: &str, on: bool);

    /// Flip `class` and return whether it is now present.
    fn toggle(&mut self, class: &str) -> bool {
        let on = !self.contains(class);
        self.set(class, on);
        on
    }
}

// In-memory class list, rendered onto the app root
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassList for ClassSet {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn set(&mut self, class: &str, on: bool) {
        if on {
            self.0.insert(class.to_string());
        } else {
            self.0.remove(class);
        }
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for class in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_presence() {
        let mut classes = ClassSet::default();
        assert!(classes.toggle("open"));
        assert!(classes.contains("open"));
        assert!(!classes.toggle("open"));
        assert!(!classes.contains("open"));
    }

    #[test]
    fn display_joins_with_spaces() {
        let mut classes = ClassSet::default();
        classes.set("b", true);
        classes.set("a", true);
        assert_eq!(classes.to_string(), "a b");
        assert_eq!(ClassSet::default().to_string(), "");
    }
}
