pub mod axis;
pub mod history;
pub mod overlay;
pub mod pv;
pub mod sample;
