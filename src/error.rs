use derive_more::Display;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Display)]
pub enum OprfError {
    InvalidInput(String),
    InvalidPoint(String),
    Alignment(String),
}

impl std::error::Error for OprfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
