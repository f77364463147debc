use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Closed set of component kinds the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Button,
    Anchor,
    Text,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Button,
        ComponentKind::Anchor,
        ComponentKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "Button",
            ComponentKind::Anchor => "Anchor",
            ComponentKind::Text => "Text",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Button" => Ok(ComponentKind::Button),
            "Anchor" => Ok(ComponentKind::Anchor),
            "Text" => Ok(ComponentKind::Text),
            _ => Err(ParseError::invalid_component_type(s)),
        }
    }
}

/// One parsed `@target` line, still attached to its block's component context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    pub component: ComponentKind,
    pub target: String,
    /// The owning block's `@props` list, when one was declared before this line.
    pub props: Option<Vec<String>>,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub disabled: bool,
    pub active: bool,
    pub order: Option<String>,
    /// Literal whitespace-split tokens found inside the bracket span. May be
    /// empty, but the brackets themselves must be present in source.
    pub class_names: Vec<String>,
}

/// A style declaration reduced to the fields the downstream generators read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub target: String,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub disabled: bool,
    pub active: bool,
    pub order: Option<String>,
    pub class_names: Vec<String>,
}

impl From<&StyleDeclaration> for StyleRule {
    fn from(declaration: &StyleDeclaration) -> Self {
        Self {
            target: declaration.target.clone(),
            variant: declaration.variant.clone(),
            size: declaration.size.clone(),
            disabled: declaration.disabled,
            active: declaration.active,
            order: declaration.order.clone(),
            class_names: declaration.class_names.clone(),
        }
    }
}

/// Aggregated view of every declaration for one component kind in a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDeclaration {
    pub component: ComponentKind,
    /// Restricted prop list carried by the kind's first declaration in file
    /// order; later blocks never replace it.
    pub props: Vec<String>,
    /// Unique variant values in first-seen order, across every block for this kind.
    pub variants: Vec<String>,
    /// Unique size values in first-seen order, across every block for this kind.
    pub sizes: Vec<String>,
    /// All style rules for this kind, in file order.
    pub styles: Vec<StyleRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_kind_from_str() {
        assert_eq!("Button".parse::<ComponentKind>(), Ok(ComponentKind::Button));
        assert_eq!("Anchor".parse::<ComponentKind>(), Ok(ComponentKind::Anchor));
        assert_eq!("Text".parse::<ComponentKind>(), Ok(ComponentKind::Text));
    }

    #[test]
    fn test_component_kind_rejects_unknown() {
        let err = "Card".parse::<ComponentKind>().unwrap_err();
        assert_eq!(err.to_string(), "invalid component type: Card");
    }

    #[test]
    fn test_component_kind_display_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.to_string().parse::<ComponentKind>(), Ok(kind));
        }
    }
}
