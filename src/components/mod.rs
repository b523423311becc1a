pub mod chart;
pub mod county_table;
pub mod search_box;
pub mod selection_notice;
pub mod status;

pub use chart::CaseChart;
pub use county_table::CountyTable;
pub use search_box::SearchBox;
pub use selection_notice::SelectionNotice;
pub use status::Status;
