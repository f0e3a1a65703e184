
pub use component_builder::{pure_component, TestComponentBuilder};
