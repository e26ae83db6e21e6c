pub mod codec;
pub mod entities;
pub mod ports;
pub mod services;
