mod generate;
mod import;
mod segment;
