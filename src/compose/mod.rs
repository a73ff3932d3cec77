//! Builder-style wiring of face renderers to a controller.

pub(crate) mod builder;
