pub mod chart;
pub mod form_section;
pub mod header;
pub mod results;
pub mod utils;
