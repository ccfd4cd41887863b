pub mod a003_catalog;
