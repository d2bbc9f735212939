pub mod form;
pub mod notification;
pub mod ports;
pub mod relay;
