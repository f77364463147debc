use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("duplicate component declaration")]
    DuplicateComponent,

    #[error("invalid component type: {name}")]
    InvalidComponentType { name: String },

    #[error("target `{target}` requires a description")]
    MissingDescription { target: String },

    #[error("{tag} must have a value")]
    MissingConditionValue { tag: String },

    #[error("classnames must be wrapped in [ ]")]
    UnbracketedClassNames,
}

impl ParseError {
    pub fn invalid_component_type(name: impl Into<String>) -> Self {
        Self::InvalidComponentType { name: name.into() }
    }

    pub fn missing_description(target: impl Into<String>) -> Self {
        Self::MissingDescription {
            target: target.into(),
        }
    }

    pub fn missing_condition_value(tag: impl Into<String>) -> Self {
        Self::MissingConditionValue { tag: tag.into() }
    }
}
