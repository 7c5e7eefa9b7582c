//! Request-inspection middleware run ahead of the handlers.

pub mod canonical;
