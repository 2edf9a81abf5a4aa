mod app;
mod help;
mod main_scene;
mod model_view;
mod sidebar;
mod spinner;

pub use app::App;
