pub mod mem_collection;
