// HTTP routes
pub mod error;
pub mod fetch;
pub mod health;
pub mod publish;
pub mod published;

pub use error::*;
pub use fetch::*;
pub use health::*;
pub use publish::*;
pub use published::*;
