pub mod system;
pub mod webinars;
