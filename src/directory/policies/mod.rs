mod name_collation;

pub use name_collation::NameCollation;
