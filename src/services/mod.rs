pub mod normalize;
pub mod providers;
pub mod ranking;
pub mod session;
pub mod stitch;
