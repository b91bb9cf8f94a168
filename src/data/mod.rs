pub mod curve_look;
pub mod gesture;
pub mod trace;
