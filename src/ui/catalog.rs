// Static catalog of the showcased UI components

/// One list entry describing a UI component category
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ComponentEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub section: &'static str,
}

/// Section headers, in display order
pub static SECTIONS: [&str; 3] = ["Display", "Input", "Layout"];

/// Every showcased component, grouped by section, in display order
pub static ENTRIES: [ComponentEntry; 6] = [
    ComponentEntry {
        title: "Text",
        description: "Displays text",
        section: "Display",
    },
    ComponentEntry {
        title: "Image",
        description: "Displays an image",
        section: "Display",
    },
    ComponentEntry {
        title: "TextField",
        description: "Input field for text",
        section: "Input",
    },
    ComponentEntry {
        title: "PasswordField",
        description: "Input field for passwords",
        section: "Input",
    },
    ComponentEntry {
        title: "Column",
        description: "Arranges elements vertically",
        section: "Layout",
    },
    ComponentEntry {
        title: "Row",
        description: "Arranges elements horizontally",
        section: "Layout",
    },
];

/// Entries belonging to one section, with their index into `ENTRIES`.
/// The index doubles as the keyboard cursor position.
pub fn entries_in(section: &'static str) -> impl Iterator<Item = (usize, &'static ComponentEntry)> {
    ENTRIES
        .iter()
        .enumerate()
        .filter(move |(_, e)| e.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_entries_three_sections() {
        assert_eq!(ENTRIES.len(), 6);
        assert_eq!(SECTIONS.len(), 3);
    }

    #[test]
    fn every_entry_sits_in_a_known_section() {
        for entry in &ENTRIES {
            assert!(SECTIONS.contains(&entry.section), "{} is orphaned", entry.title);
        }
    }

    #[test]
    fn every_section_has_two_entries() {
        for section in SECTIONS {
            assert_eq!(entries_in(section).count(), 2, "section {}", section);
        }
    }

    #[test]
    fn titles_and_descriptions_are_non_empty() {
        for entry in &ENTRIES {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty(), "{}", entry.title);
        }
    }

    #[test]
    fn titles_are_unique() {
        for (i, a) in ENTRIES.iter().enumerate() {
            for b in &ENTRIES[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn entries_in_preserves_catalog_order() {
        let display: Vec<&str> = entries_in("Display").map(|(_, e)| e.title).collect();
        assert_eq!(display, ["Text", "Image"]);
    }
}
