use std::cell::RefCell;

/// Options for wrapper generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Emit a Storybook story next to each wrapper.
    pub stories: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { stories: true }
    }
}

/// Emission buffer with indent tracking for generated source text.
pub struct CompilerContext {
    buffer: RefCell<String>,
    indent_level: RefCell<usize>,
}

impl CompilerContext {
    pub fn new() -> Self {
        Self {
            buffer: RefCell::new(String::new()),
            indent_level: RefCell::new(0),
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        let indent = "  ".repeat(*self.indent_level.borrow());
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
        buffer.push('\n');
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Default for CompilerContext {
    fn default() -> Self {
        Self::new()
    }
}
