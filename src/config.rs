/// The configuration parameters for the handler.
///
/// Pulled from environment variables, which is how the lambda deployment
/// passes them in.
#[derive(Debug, Clone)]
pub struct Config {
    /// The region the import bucket lives in.
    pub region: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        Ok(Config { region })
    }
}
