//! Wrapper and story source generation.
//!
//! From each aggregated component declaration this emits a restricted-prop
//! TSX wrapper around the underlying Mantine component, plus an optional
//! Storybook story. Every generated tree also gets the shared
//! `withRestrictedProps` factory file.

use std::path::PathBuf;

use themeloom_parser::{ComponentDeclaration, ComponentKind};

use crate::context::{CompilerContext, GenerateOptions};

/// One generated source file, path relative to the component output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Shared higher-order factory; the body is identical in every generated tree.
/// It merges caller props over defaults, forwards children and pass-through
/// attributes, and pins a constant displayName.
const WITH_RESTRICTED_PROPS: &str = r#"import type { ComponentType, ElementType, PropsWithChildren } from "react";

export function withRestrictedProps<
  TElementType extends ElementType,
  TOriginalProps extends object,
  TAllowedProps extends keyof TOriginalProps,
  TOverrideProps extends Partial<Record<TAllowedProps, any>> = {}
>(
  displayName: string,
  Component: ComponentType<TOriginalProps>,
  defaultProps: Partial<Pick<TOriginalProps, TAllowedProps>> = {}
) {
  function RestrictedComponent(
    props: PropsWithChildren<
      Omit<Pick<TOriginalProps, TAllowedProps>, keyof TOverrideProps> &
        TOverrideProps &
        React.ComponentPropsWithoutRef<TElementType>
    >
  ) {
    return <Component {...(defaultProps as TOriginalProps)} {...props} />;
  }

  RestrictedComponent.displayName = displayName;

  return RestrictedComponent;
}
"#;

/// Generate the full component file set for an aggregate.
///
/// The shared factory file is always emitted; each declared kind gets a
/// wrapper under its own directory and, when enabled, a story beside it.
pub fn generate_components(
    components: &[ComponentDeclaration],
    options: &GenerateOptions,
) -> Vec<GeneratedFile> {
    let mut files = vec![GeneratedFile {
        path: PathBuf::from("with-restricted-props.tsx"),
        content: WITH_RESTRICTED_PROPS.to_string(),
    }];

    for component in components {
        let kind = component.component;
        files.push(GeneratedFile {
            path: PathBuf::from(format!("{kind}/{kind}.tsx")),
            content: generate_wrapper(component),
        });
        if options.stories {
            files.push(GeneratedFile {
                path: PathBuf::from(format!("{kind}/{kind}.stories.tsx")),
                content: generate_story(component),
            });
        }
    }

    files
}

/// Underlying element type per kind. The match is exhaustive on purpose:
/// adding a `ComponentKind` member without wiring its template is a compile
/// error, not a silent fall-through.
fn element_type(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Button => "button",
        ComponentKind::Anchor => "a",
        ComponentKind::Text => "p",
    }
}

fn generate_wrapper(component: &ComponentDeclaration) -> String {
    let ctx = CompilerContext::new();
    let name = component.component.as_str();

    ctx.add_line("import { withRestrictedProps } from \"../with-restricted-props\";");
    ctx.add_line(&format!(
        "import {{ {name} as Mantine{name}, type {name}Props as Mantine{name}Props }} from \"@mantine/core\";"
    ));
    ctx.add("\n");

    let has_overrides = !component.variants.is_empty() || !component.sizes.is_empty();
    if has_overrides {
        ctx.add_line(&format!("interface {name}Overrides {{"));
        ctx.indent();
        if !component.variants.is_empty() {
            ctx.add_line(&format!("variant?: {};", union_type(&component.variants)));
        }
        if !component.sizes.is_empty() {
            ctx.add_line(&format!("size?: {};", union_type(&component.sizes)));
        }
        ctx.dedent();
        ctx.add_line("}");
        ctx.add("\n");
    }

    // Restricted prop surface: the declared props, plus variant/size when any
    // values were declared for them.
    let mut allowed = component.props.clone();
    if !component.variants.is_empty() {
        allowed.push("variant".to_string());
    }
    if !component.sizes.is_empty() {
        allowed.push("size".to_string());
    }
    let allowed_union = if allowed.is_empty() {
        "\"\"".to_string()
    } else {
        union_type(&allowed)
    };

    ctx.add_line(&format!("export const {name} = withRestrictedProps<"));
    ctx.indent();
    ctx.add_line(&format!("\"{}\",", element_type(component.component)));
    ctx.add_line(&format!("Mantine{name}Props,"));
    if has_overrides {
        ctx.add_line(&format!("{allowed_union},"));
        ctx.add_line(&format!("{name}Overrides"));
    } else {
        ctx.add_line(&allowed_union);
    }
    ctx.dedent();
    ctx.add_line(&format!(">(\"{name}\", Mantine{name});"));

    ctx.get_output()
}

fn generate_story(component: &ComponentDeclaration) -> String {
    let ctx = CompilerContext::new();
    let name = component.component.as_str();
    let first_variant = component.variants.first();
    let first_size = component.sizes.first();
    let has_loading = component.props.iter().any(|prop| prop == "loading");
    let has_full_width = component.props.iter().any(|prop| prop == "fullWidth");

    ctx.add_line("import type { Meta, StoryObj } from \"@storybook/react\";");
    ctx.add_line(&format!("import {{ {name} }} from \"./{name}\";"));
    ctx.add("\n");

    ctx.add_line("const meta = {");
    ctx.indent();
    ctx.add_line(&format!("title: \"Components/{name}\","));
    ctx.add_line(&format!("component: {name},"));
    ctx.add_line("parameters: {");
    ctx.indent();
    ctx.add_line("layout: \"centered\",");
    ctx.dedent();
    ctx.add_line("},");
    ctx.add_line("tags: [\"autodocs\"],");
    ctx.add_line("argTypes: {");
    ctx.indent();
    if !component.variants.is_empty() {
        emit_select_arg_type(&ctx, "variant", &component.variants, &format!("{name} variant style"));
    }
    if !component.sizes.is_empty() {
        emit_select_arg_type(&ctx, "size", &component.sizes, &format!("{name} size"));
    }
    if has_full_width {
        emit_boolean_arg_type(&ctx, "fullWidth", &format!("{name} full width"));
    }
    if has_loading {
        emit_boolean_arg_type(&ctx, "loading", &format!("{name} loading"));
    }
    ctx.add_line("children: {");
    ctx.indent();
    ctx.add_line("control: \"text\",");
    ctx.add_line(&format!("description: \"{name} content\","));
    ctx.dedent();
    ctx.add_line("},");
    ctx.dedent();
    ctx.add_line("},");
    ctx.dedent();
    ctx.add_line(&format!("}} satisfies Meta<typeof {name}>;"));
    ctx.add("\n");
    ctx.add_line("export default meta;");
    ctx.add_line("type Story = StoryObj<typeof meta>;");
    ctx.add("\n");

    if component.variants.is_empty() && component.sizes.is_empty() {
        emit_story(&ctx, name, "Default", &[]);
    } else {
        // One scenario per variant, size held at its first-declared value.
        for variant in &component.variants {
            let mut args = vec![("variant", quote(variant))];
            if let Some(size) = first_size {
                args.push(("size", quote(size)));
            }
            emit_story(&ctx, name, &pascal_case(variant), &args);
        }
        // One scenario per size, variant held at its first-declared value.
        for size in &component.sizes {
            let mut args = Vec::new();
            if let Some(variant) = first_variant {
                args.push(("variant", quote(variant)));
            }
            args.push(("size", quote(size)));
            emit_story(&ctx, name, &format!("Size{}", pascal_case(size)), &args);
        }
    }

    if has_loading {
        emit_story(&ctx, name, "Loading", &[("loading", "true".to_string())]);
    }
    if has_full_width {
        emit_story(&ctx, name, "FullWidth", &[("fullWidth", "true".to_string())]);
    }

    // Always close with a disabled scenario at the first variant and size.
    let mut args = Vec::new();
    if let Some(variant) = first_variant {
        args.push(("variant", quote(variant)));
    }
    if let Some(size) = first_size {
        args.push(("size", quote(size)));
    }
    args.push(("disabled", "true".to_string()));
    emit_story(&ctx, name, "Disabled", &args);

    ctx.get_output()
}

fn emit_select_arg_type(ctx: &CompilerContext, prop: &str, options: &[String], description: &str) {
    ctx.add_line(&format!("{prop}: {{"));
    ctx.indent();
    ctx.add_line("control: { type: \"select\" },");
    ctx.add_line(&format!("options: [{}],", quoted_list(options)));
    ctx.add_line(&format!("description: \"{description}\","));
    ctx.dedent();
    ctx.add_line("},");
}

fn emit_boolean_arg_type(ctx: &CompilerContext, prop: &str, description: &str) {
    ctx.add_line(&format!("{prop}: {{"));
    ctx.indent();
    ctx.add_line("control: { type: \"boolean\" },");
    ctx.add_line(&format!("description: \"{description}\","));
    ctx.dedent();
    ctx.add_line("},");
}

fn emit_story(ctx: &CompilerContext, name: &str, export_name: &str, args: &[(&str, String)]) {
    ctx.add_line(&format!("// {export_name} {name} story"));
    ctx.add_line(&format!("export const {export_name}: Story = {{"));
    ctx.indent();
    ctx.add_line("args: {");
    ctx.indent();
    for (key, value) in args {
        ctx.add_line(&format!("{key}: {value},"));
    }
    ctx.add_line(&format!(
        "children: \"{} {}\",",
        split_pascal(export_name),
        name
    ));
    ctx.dedent();
    ctx.add_line("},");
    ctx.dedent();
    ctx.add_line("};");
    ctx.add("\n");
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| quote(value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn union_type(values: &[String]) -> String {
    values
        .iter()
        .map(|value| quote(value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// "primary" -> "Primary"
fn pascal_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "FullWidth" -> "Full Width"
fn split_pascal(value: &str) -> String {
    let mut result = String::new();
    for (index, character) in value.chars().enumerate() {
        if index > 0 && character.is_uppercase() {
            result.push(' ');
        }
        result.push(character);
    }
    result
}
