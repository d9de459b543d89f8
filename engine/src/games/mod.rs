mod session_rng;

pub mod renju;

pub use session_rng::SessionRng;
