/// Error type for everything outside the (infallible) profiling core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ValidationError(String),
    BrowserApiError(String),
    DisplayError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::BrowserApiError(msg) => write!(f, "Browser API Error: {}", msg),
            AppError::DisplayError(msg) => write!(f, "Display Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type BrowserResult<T> = Result<T, AppError>;
