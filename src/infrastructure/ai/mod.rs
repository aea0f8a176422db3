pub mod minimax;

pub use minimax::MinimaxBot;
