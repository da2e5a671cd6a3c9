use std::sync::Arc;

use crate::service::import::RowConsumer;
use crate::service::s3::ObjectStore;

/// The dependencies the handler runs against, assembled once per lambda
/// lifetime and cloned into each invocation.
#[derive(Clone)]
pub struct Context {
    pub store: Arc<dyn ObjectStore>,
    pub rows: Arc<dyn RowConsumer>,
}
