pub mod aggregator;
pub mod annotation_parser;
pub mod ast;
pub mod error;

pub use aggregator::aggregate;
pub use annotation_parser::parse;
pub use ast::{ComponentDeclaration, ComponentKind, StyleDeclaration, StyleRule};
pub use error::{ParseError, ParseResult};

/// Parse a theme source file and reduce its declarations into one aggregate
/// per component kind.
pub fn parse_components(content: &str) -> ParseResult<Vec<ComponentDeclaration>> {
    Ok(aggregate(&parse(content)?))
}
