pub mod feed;
pub mod heartbeat;
