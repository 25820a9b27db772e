pub mod feedback;
pub mod service_requests;
