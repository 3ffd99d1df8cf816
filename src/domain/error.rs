use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unknown model: {key}")]
    UnknownModel { key: String },

    #[error("Unknown model family: {family}")]
    UnknownModelFamily { family: String },

    #[error("Model load error: {model} - {message}")]
    ModelLoad { model: String, message: String },

    #[error("Inference error: {model} - {message}")]
    Inference { model: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unknown_model(key: impl Into<String>) -> Self {
        Self::UnknownModel { key: key.into() }
    }

    pub fn unknown_family(family: impl Into<String>) -> Self {
        Self::UnknownModelFamily {
            family: family.into(),
        }
    }

    pub fn model_load(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ModelLoad {
            model: model.into(),
            message: message.into(),
        }
    }

    pub fn inference(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Inference {
            model: model.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_error() {
        let error = DomainError::unknown_model("bogus");
        assert_eq!(error.to_string(), "Unknown model: bogus");
    }

    #[test]
    fn test_model_load_error() {
        let error = DomainError::model_load("model1", "artifact missing");
        assert_eq!(
            error.to_string(),
            "Model load error: model1 - artifact missing"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("empty text");
        assert_eq!(error.to_string(), "Validation error: empty text");
    }
}
