use serde::{Deserialize, Serialize};
use std::fmt;

/// Sidebar destinations of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveView {
    Dashboard,
    Cameras,
    Incidents,
    Analytics,
    Investigations,
    Locations,
    AiInsights,
    Users,
    Reports,
    Settings,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Cameras => "cameras",
            ActiveView::Incidents => "incidents",
            ActiveView::Analytics => "analytics",
            ActiveView::Investigations => "investigations",
            ActiveView::Locations => "locations",
            ActiveView::AiInsights => "ai-insights",
            ActiveView::Users => "users",
            ActiveView::Reports => "reports",
            ActiveView::Settings => "settings",
        }
    }

    /// Parse a navigation identifier, tolerating unknown values as None
    pub fn parse(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|view| view.as_str() == id)
    }

    pub fn all() -> [ActiveView; 10] {
        [
            ActiveView::Dashboard,
            ActiveView::Cameras,
            ActiveView::Incidents,
            ActiveView::Analytics,
            ActiveView::Investigations,
            ActiveView::Locations,
            ActiveView::AiInsights,
            ActiveView::Users,
            ActiveView::Reports,
            ActiveView::Settings,
        ]
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sidebar navigation entry with its notification badge count
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub view: ActiveView,
    pub label: &'static str,
    pub notifications: u32,
}

/// The sidebar navigation in display order
pub fn navigation() -> Vec<NavEntry> {
    vec![
        NavEntry {
            view: ActiveView::Dashboard,
            label: "Dashboard",
            notifications: 0,
        },
        NavEntry {
            view: ActiveView::Cameras,
            label: "Live Cameras",
            notifications: 0,
        },
        NavEntry {
            view: ActiveView::Incidents,
            label: "Incidents",
            notifications: 5,
        },
        NavEntry {
            view: ActiveView::Analytics,
            label: "Analytics",
            notifications: 0,
        },
        NavEntry {
            view: ActiveView::Investigations,
            label: "Investigations",
            notifications: 2,
        },
        NavEntry {
            view: ActiveView::Locations,
            label: "Locations",
            notifications: 0,
        },
        NavEntry {
            view: ActiveView::AiInsights,
            label: "AI Insights",
            notifications: 1,
        },
        NavEntry {
            view: ActiveView::Users,
            label: "Users",
            notifications: 0,
        },
        NavEntry {
            view: ActiveView::Reports,
            label: "Reports",
            notifications: 0,
        },
        NavEntry {
            view: ActiveView::Settings,
            label: "Settings",
            notifications: 0,
        },
    ]
}

/// Camera wall layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridLayout {
    #[serde(rename = "1x1")]
    Single,
    #[serde(rename = "2x2")]
    TwoByTwo,
    #[serde(rename = "3x3")]
    ThreeByThree,
}

impl GridLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridLayout::Single => "1x1",
            GridLayout::TwoByTwo => "2x2",
            GridLayout::ThreeByThree => "3x3",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "1x1" => Some(GridLayout::Single),
            "2x2" => Some(GridLayout::TwoByTwo),
            "3x3" => Some(GridLayout::ThreeByThree),
            _ => None,
        }
    }

    /// Feeds shown per page of the wall
    pub fn tiles(&self) -> usize {
        match self {
            GridLayout::Single => 1,
            GridLayout::TwoByTwo => 4,
            GridLayout::ThreeByThree => 9,
        }
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit UI state for the console shell
///
/// All of it is owned and mutated through these methods; there are no
/// ambient singletons behind the scenes.
#[derive(Debug, Clone)]
pub struct ViewState {
    active: ActiveView,
    sidebar_collapsed: bool,
    grid_layout: GridLayout,
}

impl ViewState {
    pub fn new(active: ActiveView, grid_layout: GridLayout) -> Self {
        Self {
            active,
            sidebar_collapsed: false,
            grid_layout,
        }
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    /// Switch the active view; returns true when the view changed
    pub fn activate(&mut self, view: ActiveView) -> bool {
        if self.active == view {
            return false;
        }
        self.active = view;
        true
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn grid_layout(&self) -> GridLayout {
        self.grid_layout
    }

    pub fn set_grid_layout(&mut self, layout: GridLayout) {
        self.grid_layout = layout;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ActiveView::Dashboard, GridLayout::ThreeByThree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse_round_trips() {
        for view in ActiveView::all() {
            assert_eq!(ActiveView::parse(view.as_str()), Some(view));
        }
        assert_eq!(ActiveView::parse("unknown"), None);
    }

    #[test]
    fn test_navigation_badges() {
        let nav = navigation();
        assert_eq!(nav.len(), 10);
        assert_eq!(nav[0].view, ActiveView::Dashboard);

        let incidents = nav
            .iter()
            .find(|entry| entry.view == ActiveView::Incidents)
            .unwrap();
        assert_eq!(incidents.notifications, 5);

        let badged: u32 = nav.iter().map(|entry| entry.notifications).sum();
        assert_eq!(badged, 8);
    }

    #[test]
    fn test_grid_layout_parse_and_tiles() {
        assert_eq!(GridLayout::parse("2x2"), Some(GridLayout::TwoByTwo));
        assert_eq!(GridLayout::parse("4x4"), None);
        assert_eq!(GridLayout::ThreeByThree.tiles(), 9);
    }

    #[test]
    fn test_view_state_updates() {
        let mut state = ViewState::default();
        assert_eq!(state.active(), ActiveView::Dashboard);
        assert!(!state.sidebar_collapsed());

        assert!(state.activate(ActiveView::Incidents));
        assert!(!state.activate(ActiveView::Incidents));
        assert_eq!(state.active(), ActiveView::Incidents);

        state.toggle_sidebar();
        assert!(state.sidebar_collapsed());
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed());

        state.set_grid_layout(GridLayout::Single);
        assert_eq!(state.grid_layout(), GridLayout::Single);
    }
}
