pub mod mutator;
pub mod selector;

pub use mutator::{process_theme_content, rewrite_class_maps, ThemeError, ThemeResult};
pub use selector::{component_classes, style_rule_classes};
