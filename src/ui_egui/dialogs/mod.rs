pub mod add_nurse;
