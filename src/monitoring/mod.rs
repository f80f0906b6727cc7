/*!
 * Monitoring
 * Structured logging setup for the simulator binary
 */

mod tracer;

pub use tracer::init_tracing;
