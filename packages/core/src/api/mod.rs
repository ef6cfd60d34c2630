// Публичный API
// Высокоуровневые методы для построения и проверки защищённых сообщений

pub mod adapter;
pub mod verify;

pub use adapter::{Adapter, ConvenienceAdapter, HttpAdapter};
pub use verify::{decode_json, Verifier};
