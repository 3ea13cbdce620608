use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "salon_backend", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "salon_backend", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "salon_backend", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "salon_backend", "{}", message);
    }
}
