//! Conditional Tailwind class generation.

use themeloom_parser::{ComponentDeclaration, StyleRule};

/// Render one style rule as a conditional class fragment.
///
/// Attribute clauses always compose in the order variant, size, disabled,
/// active, order, regardless of how the directives appeared in source. When
/// any clause exists, every class name is prefixed with the compound
/// `[&...]` selector; otherwise the class names pass through untouched.
pub fn style_rule_classes(rule: &StyleRule) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if let Some(variant) = &rule.variant {
        clauses.push(format!("[data-variant='{variant}']"));
    }
    if let Some(size) = &rule.size {
        clauses.push(format!("[data-size='{size}']"));
    }
    if rule.disabled {
        clauses.push("[data-disabled='true']".to_string());
    }
    if rule.active {
        clauses.push("[data-active='true']".to_string());
    }
    if let Some(order) = &rule.order {
        clauses.push(format!("[data-order='{order}']"));
    }

    let selector = if clauses.is_empty() {
        None
    } else {
        Some(format!("[&{}]", clauses.join("&&")))
    };

    rule.class_names
        .iter()
        .map(|class_name| match &selector {
            Some(selector) => format!("{selector}:{class_name}"),
            None => class_name.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The full class string for one component: every rule's fragment joined by
/// a single space, in declaration order. Empty fragments (from a `[ ]` span)
/// are skipped so they never leave a stray separator.
pub fn component_classes(declaration: &ComponentDeclaration) -> String {
    declaration
        .styles
        .iter()
        .map(style_rule_classes)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeloom_parser::parse_components;

    fn classes(source: &str) -> String {
        let components = parse_components(source).unwrap();
        component_classes(&components[0])
    }

    #[test]
    fn test_empty_target_line_yields_empty_string() {
        let source = r#"
        /**
         * @component Button
         * @target root [ ]
         */
        "#;
        assert_eq!(classes(source), "");
    }

    #[test]
    fn test_variant_prefixes_every_class() {
        let source = r#"
        /**
         * @component Button
         * @target root @variant primary [ text-2xl font-bold rounded-md ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-variant='primary']]:text-2xl [&[data-variant='primary']]:font-bold [&[data-variant='primary']]:rounded-md"
        );
    }

    #[test]
    fn test_variant_and_size_share_one_compound_selector() {
        let source = r#"
        /**
         * @component Button
         * @target root @variant primary @size lg [ text-2xl ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-variant='primary']&&[data-size='lg']]:text-2xl"
        );
    }

    #[test]
    fn test_size_only() {
        let source = r#"
        /**
         * @component Button
         * @target root @size lg [ text-2xl font-bold rounded-md ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-size='lg']]:text-2xl [&[data-size='lg']]:font-bold [&[data-size='lg']]:rounded-md"
        );
    }

    #[test]
    fn test_clause_order_is_fixed_regardless_of_source_order() {
        let source = r#"
        /**
         * @component Button
         * @target root @size lg @variant primary [ text-2xl ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-variant='primary']&&[data-size='lg']]:text-2xl"
        );
    }

    #[test]
    fn test_multiple_target_lines_join_with_single_space() {
        let source = r#"
        /**
         * @component Button
         * @target root @variant primary @size lg [ text-2xl font-bold ]
         * @target root @variant secondary @size sm [ text-lg ]
         * @target root @variant tertiary [ bg-red-100 ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-variant='primary']&&[data-size='lg']]:text-2xl \
             [&[data-variant='primary']&&[data-size='lg']]:font-bold \
             [&[data-variant='secondary']&&[data-size='sm']]:text-lg \
             [&[data-variant='tertiary']]:bg-red-100"
        );
    }

    #[test]
    fn test_disabled_flag() {
        let source = r#"
        /**
         * @component Button
         * @target root @disabled [ text-2xl ]
         */
        "#;
        assert_eq!(classes(source), "[&[data-disabled='true']]:text-2xl");
    }

    #[test]
    fn test_variant_with_disabled_and_active() {
        let source = r#"
        /**
         * @component Button
         * @target root @variant primary @disabled [ a ]
         * @target root @variant primary @active [ b ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-variant='primary']&&[data-disabled='true']]:a \
             [&[data-variant='primary']&&[data-active='true']]:b"
        );
    }

    #[test]
    fn test_order_clause_renders_last() {
        let source = r#"
        /**
         * @component Button
         * @target root @order 2 @variant primary [ a ]
         */
        "#;
        assert_eq!(
            classes(source),
            "[&[data-variant='primary']&&[data-order='2']]:a"
        );
    }

    #[test]
    fn test_no_conditions_pass_through_unprefixed() {
        let source = r#"
        /**
         * @component Button
         * @target root [ text-2xl font-bold rounded-md ]
         */
        "#;
        assert_eq!(classes(source), "text-2xl font-bold rounded-md");
    }

    #[test]
    fn test_empty_fragment_leaves_no_stray_separator() {
        let source = r#"
        /**
         * @component Button
         * @target root [ ]
         * @target root @variant primary [ a ]
         */
        "#;
        assert_eq!(classes(source), "[&[data-variant='primary']]:a");
    }
}
