pub mod feedback_request;
pub mod info_response;
pub mod message_response;
pub mod messages;
pub mod send_request;
