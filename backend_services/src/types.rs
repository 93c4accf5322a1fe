#[derive(serde::Deserialize)]
pub struct PageQuery {
    pub session_id: Option<String>,
    pub locale: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
