//! Tag editor: a free-text draft appended to an ordered set of unique tags.

/// Result of trying to add the draft as a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// The trimmed draft was appended and the draft cleared.
    Added(String),
    /// The draft was empty or whitespace.
    Empty,
    /// The tag already exists (case-sensitive).
    Duplicate,
}

/// Draft text plus the tags entered so far.
///
/// Invariant: `tags` never holds an empty string or a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditor {
    tags: Vec<String>,
    draft: String,
}

impl TagEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Appends the trimmed draft unless it is empty or already present.
    pub fn add_tag(&mut self) -> TagOutcome {
        let tag = self.draft.trim();
        if tag.is_empty() {
            return TagOutcome::Empty;
        }
        if self.tags.iter().any(|t| t == tag) {
            return TagOutcome::Duplicate;
        }
        let tag = tag.to_string();
        self.tags.push(tag.clone());
        self.draft.clear();
        TagOutcome::Added(tag)
    }

    /// Confirms the draft field ("done").
    pub fn submit(&mut self) -> TagOutcome {
        self.add_tag()
    }

    /// Removes `tag`. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether both the draft and the tag list are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.draft.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(editor: &mut TagEditor, draft: &str) -> TagOutcome {
        editor.set_draft(draft);
        editor.add_tag()
    }

    #[test]
    fn empty_and_blank_drafts_are_rejected() {
        let mut editor = TagEditor::new();
        assert_eq!(add(&mut editor, ""), TagOutcome::Empty);
        assert_eq!(add(&mut editor, "  "), TagOutcome::Empty);
        assert!(editor.tags().is_empty());
    }

    #[test]
    fn duplicate_is_rejected_and_draft_kept() {
        let mut editor = TagEditor::new();
        assert_eq!(add(&mut editor, "Spicy"), TagOutcome::Added("Spicy".into()));
        assert_eq!(add(&mut editor, "Spicy"), TagOutcome::Duplicate);
        assert_eq!(editor.tags().len(), 1);
        assert_eq!(editor.draft(), "Spicy");
    }

    #[test]
    fn equality_is_case_sensitive() {
        let mut editor = TagEditor::new();
        add(&mut editor, "Spicy");
        add(&mut editor, "spicy");
        assert_eq!(editor.tags(), ["Spicy", "spicy"]);
    }

    #[test]
    fn draft_is_trimmed_before_compare() {
        let mut editor = TagEditor::new();
        add(&mut editor, "Lunch");
        assert_eq!(add(&mut editor, "  Lunch "), TagOutcome::Duplicate);
        assert_eq!(add(&mut editor, " Dinner "), TagOutcome::Added("Dinner".into()));
        assert_eq!(editor.tags(), ["Lunch", "Dinner"]);
    }

    #[test]
    fn successful_add_clears_draft() {
        let mut editor = TagEditor::new();
        add(&mut editor, "Brunch");
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn submit_adds_the_draft() {
        let mut editor = TagEditor::new();
        editor.set_draft("Healthy");
        assert_eq!(editor.submit(), TagOutcome::Added("Healthy".into()));
    }

    #[test]
    fn remove_tag_keeps_order_of_the_rest() {
        let mut editor = TagEditor::new();
        for tag in ["A", "B", "C"] {
            add(&mut editor, tag);
        }
        assert!(editor.remove_tag("B"));
        assert!(!editor.remove_tag("B"));
        assert_eq!(editor.tags(), ["A", "C"]);
    }

    #[test]
    fn removed_tag_can_be_added_again() {
        let mut editor = TagEditor::new();
        add(&mut editor, "Spicy");
        editor.remove_tag("Spicy");
        assert_eq!(add(&mut editor, "Spicy"), TagOutcome::Added("Spicy".into()));
    }
}
