// Domain layer - board model and the generation engine
pub mod domain;

// Application layer - session coordination and camera
pub mod application;

// Persistence boundary - snapshot contract with the save/load collaborator
pub mod persistence;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Camera, GameSession};
pub use domain::{BoardConfig, Cell, EngineError, GameSpeed, LivingSet, Pattern, presets};
pub use persistence::SavedBoardSnapshot;
