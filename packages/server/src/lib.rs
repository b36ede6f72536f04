// Vitrine - API Core
//
// Backend for publishing product pages by URL: fetch a page's display
// metadata, review it client-side, and append it to the shared published
// list that any client can read back.

pub mod config;
pub mod server;
pub mod store;

pub use config::*;
