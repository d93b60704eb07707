mod model;
pub mod state;
mod view;
pub mod view_model;

pub use view::JobDetails;
