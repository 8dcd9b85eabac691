pub mod scoped_file;
