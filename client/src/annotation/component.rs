use std::rc::Rc;

use dcs_shared::{Route, TriggerId};

/// Viewport-relative vertical extent of a rendered surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// What a component rendered, as far as scrolling is concerned.
pub trait Surface {
    fn bounding_rect(&self) -> SurfaceRect;

    fn viewport_height(&self) -> f64;

    fn scroll_into_view(&self, behavior: ScrollBehavior);
}

/// Replacement for [`default_scroll_into_view`], given through props.
pub type ScrollStrategy = Rc<dyn Fn(&dyn Surface, &Route)>;

/// Scrolls smoothly, and only when no part of the surface is visible.
pub fn default_scroll_into_view(surface: &dyn Surface, _route: &Route) {
    let rect = surface.bounding_rect();
    let partially_visible = rect.top < surface.viewport_height() && rect.bottom >= 0.0;
    if !partially_visible {
        surface.scroll_into_view(ScrollBehavior::Smooth);
    }
}

/// Props read by the annotation wrapper.
pub trait DcsProps {
    /// Trigger this component stands for, if any.
    fn trigger_id(&self) -> Option<&TriggerId>;

    fn scroll_into_view(&self) -> Option<&ScrollStrategy> {
        None
    }
}

/// Derived state handed to the wrapped component on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    /// `None` until the component's page identity and the host's counts
    /// are both known.
    pub dcs_count: Option<u32>,
    pub dcs_selected: bool,
}

/// A UI component as seen by the annotation wrapper.
pub trait Component: 'static {
    type Props: DcsProps + 'static;

    fn render(&mut self, props: &Self::Props, annotations: Annotations);

    /// The rendered surface, once there is one.
    fn surface(&self) -> Option<&dyn Surface>;
}
