pub mod deliveries;
