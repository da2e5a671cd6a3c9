use std::sync::Arc;

use aws_lambda_events::s3::S3Event;
use handler::handler;
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};

mod config;
mod context;
mod entrypoint;
mod handler;
mod model;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    entrypoint::Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env()?;

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_sdk_s3::config::Region::new(config.region.clone()))
        .load()
        .await;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let ctx = context::Context {
        store: Arc::new(s3_client),
        rows: Arc::new(service::import::DiscardRows),
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
