pub mod features;
pub mod landing;
pub mod slides;
