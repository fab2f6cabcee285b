pub mod conjugate;
pub mod counter;
pub mod kana;
pub mod settings;
pub mod unicode;
pub mod vocab;
