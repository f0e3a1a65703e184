pub mod state_value;
