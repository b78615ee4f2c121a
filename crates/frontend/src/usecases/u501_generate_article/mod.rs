pub mod model;
pub mod render;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::ArticleGenerator;
