pub mod db;
pub mod identity;
pub mod system_clock;
