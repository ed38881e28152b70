pub mod hot;
