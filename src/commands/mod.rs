pub mod decrypt;
pub mod encrypt;
pub mod info;
pub mod merge;
pub mod reorder;
pub mod split;
pub mod text;
