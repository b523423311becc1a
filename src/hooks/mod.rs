pub mod use_dashboard;
pub mod use_query_selection;
