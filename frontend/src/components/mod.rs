pub mod download_modal;
pub mod features_grid;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod icons;
pub mod impact;
pub mod navbar;
pub mod roadmap;
pub mod tech_stack;
