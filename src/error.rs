pub type ShowreelResult<T> = Result<T, ShowreelError>;

#[derive(thiserror::Error, Debug)]
pub enum ShowreelError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("evaluation error: {0}")]
    Evaluation(String),

    #[error("mail error: {0}")]
    Mail(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShowreelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn mail(msg: impl Into<String>) -> Self {
        Self::Mail(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ShowreelError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            ShowreelError::animation("x")
                .to_string()
                .contains("animation error:")
        );
        assert!(
            ShowreelError::evaluation("x")
                .to_string()
                .contains("evaluation error:")
        );
        assert!(ShowreelError::mail("x").to_string().contains("mail error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ShowreelError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
