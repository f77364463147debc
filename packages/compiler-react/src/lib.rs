pub mod compiler;
pub mod context;

pub use compiler::{generate_components, GeneratedFile};
pub use context::{CompilerContext, GenerateOptions};
