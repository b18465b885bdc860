pub mod feature_detail;
pub mod landing;
pub mod privacy_policy;
