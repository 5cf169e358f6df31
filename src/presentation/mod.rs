//! 展示层
//!
//! 三个区域（答题、等待、结果）的显示/隐藏都通过 `QuizView` 完成

pub mod render;
pub mod terminal;
pub mod view;

pub use render::RenderedResult;
pub use terminal::TerminalView;
pub use view::QuizView;
