pub mod drone_status_get;
pub mod landing_get;
pub mod move_back_post;
pub mod move_forward_post;
pub mod request_common;
pub mod takeoff_post;
pub mod turn_post;
