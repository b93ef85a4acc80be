pub mod draft_mode;
pub mod revalidate;

pub use draft_mode::DraftModeService;
pub use revalidate::{RevalidateCommand, RevalidationService};
