pub mod map;
pub mod util;
