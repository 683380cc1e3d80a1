pub mod dispatch;
pub mod trace;
