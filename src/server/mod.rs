pub mod docs;
pub mod server;
