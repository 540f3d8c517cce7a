pub mod request_builder;
pub mod visualiser_client;

pub use request_builder::{human_to_visualiser, strip_presentation, RequestBuilder};
pub use visualiser_client::{ImageSource, VisualiserClient};
