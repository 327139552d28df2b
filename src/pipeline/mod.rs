//! Pipeline components: channels, hash workers, supervisor, error checks.
//!
//! Dispatcher → task queue → N hash workers → result queue → consumer. Both queues are sized
//! to the task count, so dispatch never waits on a worker and a worker never waits on the
//! consumer.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod workers;

pub use context::{
    PipelineChannels, PipelineHandles, create_pipeline_channels, empty_pipeline_handles,
};
pub use error_handler::check_for_lost_results;
pub use orchestrator::{collect_results, run_pipeline, shutdown_pipeline_handles};
pub use workers::spawn_hash_workers;
