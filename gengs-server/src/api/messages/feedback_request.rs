use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}
