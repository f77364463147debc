use crate::error::ThemeloomError;

pub type Result<T> = std::result::Result<T, ThemeloomError>;
