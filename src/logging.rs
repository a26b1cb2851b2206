use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn configure_logging() {
    // Stderr log configuration: quiet by default so the interactive
    // prompts on stdout stay readable.
    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::new("warn,photo_api=warn"));

    // File log configuration
    let file_appender = rolling::daily("logs", "imagescout.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_filter(EnvFilter::new("info,photo_api=debug"));

    tracing_subscriber::Registry::default()
        .with(stderr_log)
        .with(file_log)
        .init();
}
