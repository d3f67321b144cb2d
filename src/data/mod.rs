/// Named categorical columns
pub mod column;
/// CSV ingestion
pub mod reader;
/// Tables of aligned columns and their split statistics
pub mod table;
