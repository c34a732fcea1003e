//! Browser platform adapters for the PDF chat client.

pub mod http;
pub mod spawn;

#[cfg(test)]
mod tests;

pub use http::HttpProcessingService;
pub use spawn::LocalSpawner;
