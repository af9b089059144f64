pub mod pull;
pub mod repo;

pub use pull::*;
pub use repo::*;
