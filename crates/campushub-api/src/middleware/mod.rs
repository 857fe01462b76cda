//! Request middleware: the access gate and request logging.

pub mod gate;
pub mod logging;
