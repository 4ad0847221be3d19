pub mod ack;
pub mod drone_status;
pub mod response_common;
