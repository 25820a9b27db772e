pub mod feedback;
pub mod service_request;

pub use feedback::{CreateFeedback, Feedback, NewFeedback};
pub use service_request::{
    CreateServiceRequest, NewServiceRequest, RequestStatus, ServiceRequest, ServiceRequestPatch,
    UpdateServiceRequest,
};
