//! Reduction of raw style declarations into per-component aggregates.

use indexmap::IndexMap;

use crate::ast::{ComponentDeclaration, ComponentKind, StyleDeclaration, StyleRule};

/// Reduce an ordered declaration list into one aggregate per component kind.
///
/// Pure reduction over the input: components keep first-seen order, styles
/// keep file order, and the variant/size registries deduplicate in first-seen
/// order. Later blocks for an already-seen kind merge into the same aggregate.
pub fn aggregate(declarations: &[StyleDeclaration]) -> Vec<ComponentDeclaration> {
    let mut components: IndexMap<ComponentKind, ComponentDeclaration> = IndexMap::new();

    for declaration in declarations {
        let entry = components
            .entry(declaration.component)
            .or_insert_with(|| ComponentDeclaration {
                component: declaration.component,
                props: declaration.props.clone().unwrap_or_default(),
                variants: Vec::new(),
                sizes: Vec::new(),
                styles: Vec::new(),
            });

        if let Some(variant) = &declaration.variant {
            if !entry.variants.contains(variant) {
                entry.variants.push(variant.clone());
            }
        }
        if let Some(size) = &declaration.size {
            if !entry.sizes.contains(size) {
                entry.sizes.push(size.clone());
            }
        }

        entry.styles.push(StyleRule::from(declaration));
    }

    components.into_values().collect()
}
