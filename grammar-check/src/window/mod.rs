mod cli;
pub mod render;

pub mod prelude {
    pub use super::cli::{WindowArgs, window_root};
}

pub use cli::{GrammarCheckerWindow, WindowAction};
pub use render::render_window;
