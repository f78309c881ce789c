pub mod demo;
pub mod gen_test;
pub mod ingest;
pub mod suggest_fix;
