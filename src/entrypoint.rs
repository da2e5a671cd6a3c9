//! Standardized initialization for this binary: environment detection,
//! tracing subscriber selection, and panic reporting.

use tracing_subscriber::EnvFilter;

/// The environment this binary is running in.
///
/// Read from `APP_ENV`; anything unrecognized counts as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Develop,
    Production,
}

impl Environment {
    pub fn new_or_prod() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("local") => Environment::Local,
            Ok("develop") => Environment::Develop,
            _ => Environment::Production,
        }
    }
}

/// Defines the initialization behaviour for this entrypoint
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// Sentinel struct which guarantees that [Entrypoint::init] was called
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Entrypoint {
    /// Create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Consume self, initialize this binary, and return a proof that it was
    /// initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Develop | Environment::Production => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
