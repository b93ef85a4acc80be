pub mod content;
pub mod revalidation;

pub use content::Tagged;
pub use revalidation::RevalidationDto;
