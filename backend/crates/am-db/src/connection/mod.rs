pub mod database;
pub mod unit_of_work;
