pub mod buf;
pub mod consts;
pub mod util;
