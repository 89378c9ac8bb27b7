pub mod mac;
pub mod neighbor;
