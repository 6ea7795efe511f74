use thiserror::Error;

/// Failures talking to the remote profile source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("user {0:?} not found")]
    MissingUser(String),
    #[error("no API token in ${0}")]
    MissingToken(String),
}

/// Everything that turns a profile render into an error card.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Data option is missing!")]
    MissingStats,
    #[error("Can't have more than {max} data-options!")]
    TooManyStats { count: usize, max: usize },
    #[error("Invalid data item found!")]
    UnknownStat(String),
    #[error("GitHub API-call error!")]
    Fetch(#[from] FetchError),
}

impl ProfileError {
    /// Horizontal shift of the message line on the error card.
    pub fn message_dx(&self) -> &'static str {
        match self {
            ProfileError::MissingStats => "-25%",
            ProfileError::TooManyStats { .. } => "-40%",
            ProfileError::UnknownStat(_) => "-26%",
            ProfileError::Fetch(_) => "-24%",
        }
    }
}

/// Content of the small fixed-layout error image.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCard {
    pub title: String,
    pub title_dx: String,
    pub message: String,
    pub message_dx: String,
}

impl ErrorCard {
    pub fn new(title: &str, error: &ProfileError) -> Self {
        Self {
            title: title.to_string(),
            title_dx: "-25%".to_string(),
            message: error.to_string(),
            message_dx: error.message_dx().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_error_cards() {
        assert_eq!(ProfileError::MissingStats.to_string(), "Data option is missing!");
        assert_eq!(
            ProfileError::TooManyStats { count: 5, max: 4 }.to_string(),
            "Can't have more than 4 data-options!"
        );
        let fetch = ProfileError::from(FetchError::Http("boom".to_string()));
        let card = ErrorCard::new("Profile", &fetch);
        assert_eq!(card.message, "GitHub API-call error!");
        assert_eq!(card.message_dx, "-24%");
    }
}
