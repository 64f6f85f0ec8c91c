pub use solved::*;

mod solved;
