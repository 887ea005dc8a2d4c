//! Panel lifecycle: lazy construct-once subtrees with a single active panel.
//!
//! The dashboard shell is the initial state and the only panel without a
//! constructed subtree. Every other panel is built on first `show`, cached
//! for the lifetime of the process, and merely toggled visible afterwards.

mod markup;

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    Dashboard,
    DayPlanner,
    WaterReminder,
    StudyLibrary,
    FocusMode,
    GamingZone,
    AiTools,
}

impl Panel {
    pub fn all() -> [Panel; 7] {
        [
            Panel::Dashboard,
            Panel::DayPlanner,
            Panel::WaterReminder,
            Panel::StudyLibrary,
            Panel::FocusMode,
            Panel::GamingZone,
            Panel::AiTools,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Panel::Dashboard => "dashboard",
            Panel::DayPlanner => "day-planner",
            Panel::WaterReminder => "water-reminder",
            Panel::StudyLibrary => "study-library",
            Panel::FocusMode => "focus-mode",
            Panel::GamingZone => "gaming-zone",
            Panel::AiTools => "ai-tools",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Panel> {
        Panel::all().into_iter().find(|p| p.slug() == slug)
    }

    /// Panels whose grid is re-rendered on every show, not just first build.
    /// The catalog data is static and cheap to render.
    fn has_catalog(&self) -> bool {
        matches!(
            self,
            Panel::StudyLibrary | Panel::AiTools | Panel::GamingZone
        )
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A constructed panel subtree. Never destroyed once built.
#[derive(Debug, Clone)]
pub struct PanelView {
    /// Static markup fragment, built exactly once.
    pub markup: String,
    /// Catalog grid, re-rendered on every show for catalog panels.
    pub grid: Option<String>,
    pub visible: bool,
    /// How many times the catalog grid has been rendered.
    pub renders: u32,
}

/// Tracks which panel is active and owns the constructed subtrees.
#[derive(Debug)]
pub struct SectionRegistry {
    views: HashMap<Panel, PanelView>,
    active: Panel,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
            active: Panel::Dashboard,
        }
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    /// Number of distinct constructed subtrees.
    pub fn built_count(&self) -> usize {
        self.views.len()
    }

    pub fn view(&self, panel: Panel) -> Option<&PanelView> {
        self.views.get(&panel)
    }

    /// Show a panel, constructing its subtree on first use.
    ///
    /// Showing the dashboard is equivalent to [`SectionRegistry::go_back`].
    pub fn show(&mut self, panel: Panel) -> Event {
        if panel == Panel::Dashboard {
            return self.go_back();
        }

        if self.active != Panel::Dashboard {
            if let Some(prev) = self.views.get_mut(&self.active) {
                prev.visible = false;
            }
        }

        let built = !self.views.contains_key(&panel);
        let view = self.views.entry(panel).or_insert_with(|| PanelView {
            markup: markup::build(panel),
            grid: None,
            visible: false,
            renders: 0,
        });

        if panel.has_catalog() {
            view.grid = Some(catalog::render_grid(panel));
            view.renders += 1;
        }

        view.visible = true;
        self.active = panel;
        Event::PanelShown {
            panel,
            built,
            at: Utc::now(),
        }
    }

    /// Hide the active panel (subtree retained) and return to the shell.
    pub fn go_back(&mut self) -> Event {
        let from = self.active;
        if from != Panel::Dashboard {
            if let Some(view) = self.views.get_mut(&from) {
                view.visible = false;
            }
        }
        self.active = Panel::Dashboard;
        Event::ReturnedToDashboard {
            from,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_on_dashboard_with_nothing_built() {
        let reg = SectionRegistry::new();
        assert_eq!(reg.active(), Panel::Dashboard);
        assert_eq!(reg.built_count(), 0);
    }

    #[test]
    fn show_builds_once_then_reuses() {
        let mut reg = SectionRegistry::new();
        match reg.show(Panel::DayPlanner) {
            Event::PanelShown { built, .. } => assert!(built),
            other => panic!("expected PanelShown, got {other:?}"),
        }
        reg.go_back();
        match reg.show(Panel::DayPlanner) {
            Event::PanelShown { built, .. } => assert!(!built),
            other => panic!("expected PanelShown, got {other:?}"),
        }
        assert_eq!(reg.built_count(), 1);
    }

    #[test]
    fn go_back_hides_but_keeps_subtree() {
        let mut reg = SectionRegistry::new();
        reg.show(Panel::WaterReminder);
        assert!(reg.view(Panel::WaterReminder).unwrap().visible);

        reg.go_back();
        assert_eq!(reg.active(), Panel::Dashboard);
        let view = reg.view(Panel::WaterReminder).unwrap();
        assert!(!view.visible);
        assert!(!view.markup.is_empty());
    }

    #[test]
    fn switching_panels_hides_previous() {
        let mut reg = SectionRegistry::new();
        reg.show(Panel::FocusMode);
        reg.show(Panel::AiTools);
        assert!(!reg.view(Panel::FocusMode).unwrap().visible);
        assert!(reg.view(Panel::AiTools).unwrap().visible);
        assert_eq!(reg.active(), Panel::AiTools);
    }

    #[test]
    fn catalog_panels_rerender_on_every_show() {
        let mut reg = SectionRegistry::new();
        reg.show(Panel::StudyLibrary);
        reg.go_back();
        reg.show(Panel::StudyLibrary);
        reg.show(Panel::GamingZone);
        reg.show(Panel::StudyLibrary);

        assert_eq!(reg.view(Panel::StudyLibrary).unwrap().renders, 3);
        assert_eq!(reg.view(Panel::GamingZone).unwrap().renders, 1);
        // Non-catalog panels never render a grid.
        reg.show(Panel::FocusMode);
        assert_eq!(reg.view(Panel::FocusMode).unwrap().renders, 0);
        assert!(reg.view(Panel::FocusMode).unwrap().grid.is_none());
    }

    #[test]
    fn show_dashboard_acts_as_go_back() {
        let mut reg = SectionRegistry::new();
        reg.show(Panel::GamingZone);
        reg.show(Panel::Dashboard);
        assert_eq!(reg.active(), Panel::Dashboard);
        assert!(!reg.view(Panel::GamingZone).unwrap().visible);
    }

    #[test]
    fn slug_roundtrip() {
        for panel in Panel::all() {
            assert_eq!(Panel::from_slug(panel.slug()), Some(panel));
        }
        assert_eq!(Panel::from_slug("no-such-panel"), None);
    }

    proptest! {
        /// Distinct constructed subtrees == distinct panels ever shown,
        /// regardless of call order or repetition.
        #[test]
        fn construction_is_idempotent(shows in proptest::collection::vec(0usize..6, 0..40)) {
            let panels = [
                Panel::DayPlanner,
                Panel::WaterReminder,
                Panel::StudyLibrary,
                Panel::FocusMode,
                Panel::GamingZone,
                Panel::AiTools,
            ];
            let mut reg = SectionRegistry::new();
            let mut distinct = std::collections::HashSet::new();
            for &i in &shows {
                reg.show(panels[i]);
                distinct.insert(panels[i]);
            }
            prop_assert_eq!(reg.built_count(), distinct.len());
        }
    }
}
