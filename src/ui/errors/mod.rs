// Mon Oct 19 2026 - Alex

pub mod display;
pub mod frame;
pub mod trace;

pub use display::ErrorBox;
pub use frame::FrameNormalizer;
pub use trace::TraceRenderer;
