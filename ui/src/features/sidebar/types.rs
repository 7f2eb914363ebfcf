// Sidebar widget state. Pure transitions; storage writes are returned as
// effects for the component to apply.
use tracing::debug;

/// Coarse viewport size the widget cares about
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32, breakpoint_px: u32) -> Self {
        if width < breakpoint_px {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SidebarAction {
    Toggle,
    Resize(u32),
    PointerEnter,
    PointerLeave,
}

/// Side effect requested by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarEffect {
    PersistCollapsed(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarState {
    /// What the user last chose; survives the mobile override
    pub preferred_collapsed: bool,
    pub collapsed: bool,
    pub hover_expanded: bool,
    pub viewport: ViewportClass,
    breakpoint_px: u32,
}

impl SidebarState {
    /// Initial state at page load from the stored flag and current width
    pub fn restore(stored: Option<bool>, width: u32, breakpoint_px: u32) -> Self {
        let preferred_collapsed = stored.unwrap_or(false);
        let mut state = Self {
            preferred_collapsed,
            collapsed: preferred_collapsed,
            hover_expanded: false,
            viewport: ViewportClass::from_width(width, breakpoint_px),
            breakpoint_px,
        };
        state.apply_viewport();
        state
    }

    pub fn reduce_in_place(&mut self, action: SidebarAction) -> Option<SidebarEffect> {
        match action {
            SidebarAction::Toggle => {
                self.collapsed = !self.collapsed;
                self.preferred_collapsed = self.collapsed;
                self.hover_expanded = false;
                debug!(collapsed = self.collapsed, "sidebar toggled");
                Some(SidebarEffect::PersistCollapsed(self.collapsed))
            }
            SidebarAction::Resize(width) => {
                let viewport = ViewportClass::from_width(width, self.breakpoint_px);
                if viewport != self.viewport {
                    debug!(?viewport, width, "sidebar viewport class changed");
                }
                self.viewport = viewport;
                self.apply_viewport();
                None
            }
            SidebarAction::PointerEnter => {
                if self.collapsed && self.viewport == ViewportClass::Desktop {
                    self.hover_expanded = true;
                }
                None
            }
            SidebarAction::PointerLeave => {
                self.hover_expanded = false;
                None
            }
        }
    }

    fn apply_viewport(&mut self) {
        match self.viewport {
            ViewportClass::Mobile => {
                self.collapsed = true;
                self.hover_expanded = false;
            }
            ViewportClass::Desktop => {
                self.collapsed = self.preferred_collapsed;
            }
        }
    }

    /// Classes for the `#sidebar` element
    pub fn css_class(&self) -> String {
        let mut classes = String::from("sidebar");
        if self.collapsed {
            classes.push_str(" collapsed");
        }
        if self.hover_expanded {
            classes.push_str(" hover-expanded");
        }
        classes
    }

    /// Chevron pointing the way the sidebar will move when clicked
    pub fn icon_class(&self) -> &'static str {
        if self.collapsed {
            "bi bi-chevron-right"
        } else {
            "bi bi-chevron-left"
        }
    }
}
