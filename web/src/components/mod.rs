pub mod date_range_picker;
pub mod delivery_list;
pub mod error;
pub mod loading;

// Re-export commonly used types
pub use date_range_picker::DateRangePicker;
pub use delivery_list::DeliveryList;
