// Application and presentation layers: use cases over the integration
// repository and the error surface handed to callers.

pub mod application;
pub mod presentation;
