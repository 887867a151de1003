pub mod db;
pub mod faction;
