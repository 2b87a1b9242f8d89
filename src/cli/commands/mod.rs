pub mod decode;
pub mod sample;
pub mod serve;
