mod annotated;
mod component;

pub use annotated::{Annotated, Annotator};
pub use component::{
    default_scroll_into_view, Annotations, Component, DcsProps, ScrollBehavior, ScrollStrategy,
    Surface, SurfaceRect,
};
