pub mod plain_array;
