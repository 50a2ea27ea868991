//! Header, tab bar, status line and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use crate::app::state::{DiscoverFocus, FormField, ProfileFocus, SavedFocus};
use crate::app::{App, AppMode, StatusKind, Tab};

impl App {
    pub(super) fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("Tastebud", self.theme.header_style()),
            Span::styled(
                format!("  Hey, {}!", self.prefs.display_name),
                self.theme.normal_style(),
            ),
            Span::styled(
                format!("  ·  {}", self.prefs.location),
                self.theme.muted_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    pub(super) fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<String> = Tab::all()
            .iter()
            .map(|t| format!("{} {}", t.index() + 1, t.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(self.theme.muted_style())
            .highlight_style(self.theme.highlight_style())
            .divider("│");
        frame.render_widget(tabs, area);
    }

    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let Some(status) = &self.status else {
            return;
        };
        let style = match status.kind {
            StatusKind::Info => self.theme.muted_style(),
            StatusKind::Success => self.theme.success_style(),
            StatusKind::Error => self.theme.error_style(),
        };
        frame.render_widget(Paragraph::new(Span::styled(status.text.clone(), style)), area);
    }

    pub(super) fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, action) in self.key_hints() {
            spans.push(Span::styled(format!("[{key}] "), self.theme.highlight_style()));
            spans.push(Span::styled(format!("{action}  "), self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Key hints for the current focus.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.mode == AppMode::LogFood {
            let focus = self
                .log_food
                .as_ref()
                .map_or(FormField::FoodName, |s| s.focus);
            let mut hints = vec![("Tab", "Next field")];
            match focus {
                FormField::Rating => hints.push(("1-5", "Rate")),
                FormField::Tags => {
                    hints.push(("Enter", "Add tag"));
                    hints.push(("Ctrl+←/→", "Pick"));
                    hints.push(("Ctrl+X", "Remove"));
                }
                FormField::Photo => hints.push(("Enter", "Take photo")),
                _ => {}
            }
            hints.push(("Ctrl+S", "Save"));
            hints.push(("Esc", "Close"));
            return hints;
        }

        let mut hints = vec![("Tab", "Switch")];
        match self.tab {
            Tab::Discover => match self.discover.focus {
                DiscoverFocus::Search => hints.push(("Esc", "Done")),
                DiscoverFocus::Cuisine | DiscoverFocus::Mood => {
                    hints.push(("←/→", "Choose"));
                    hints.push(("Enter", "Filter"));
                }
                DiscoverFocus::List => {
                    hints.push(("/", "Search"));
                    hints.push(("s", "Save"));
                }
            },
            Tab::Diary if self.diary.searching => hints.push(("Esc", "Done")),
            Tab::Diary => hints.push(("/", "Search")),
            Tab::Saved => match self.saved.focus {
                SavedFocus::Filters => hints.push(("←/→", "Choose")),
                SavedFocus::List => hints.push(("s", "Remove")),
            },
            Tab::Stats => hints.push(("←/→", "Period")),
            Tab::Profile => match self.profile.focus {
                ProfileFocus::Menu => hints.push(("Enter", "Open")),
                ProfileFocus::Friends => hints.push(("Space", "Select")),
            },
        }
        hints.push(("n", "Log food"));
        hints.push(("q", "Quit"));
        hints
    }
}
