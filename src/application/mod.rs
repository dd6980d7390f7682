mod camera;
mod session;

pub use camera::Camera;
pub use session::GameSession;
