pub mod advisor;
pub mod climate;
pub mod fertilizer;
pub mod irrigation;
pub mod risk;
pub mod varieties;

pub use advisor::Advisor;
