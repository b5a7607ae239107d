pub mod pos_store;
