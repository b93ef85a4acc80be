pub mod client;
pub mod error;
pub mod extract;
pub mod graphql;
pub mod registry;

pub use client::ContentfulClient;
pub use error::ContentfulError;
pub use registry::{ContentfulClients, ContentfulSettings};
