pub mod catalog;
pub mod data_core;
pub mod decode;
pub mod encode;
pub mod envelope;
pub mod form;
pub mod node;
pub mod trade;
pub mod validate;
