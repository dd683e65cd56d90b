pub mod arm;
pub mod auth;
pub mod client;
pub mod kudu;
pub mod templates;
pub mod webapps;

pub use client::ArmClient;
pub use kudu::KuduClient;
