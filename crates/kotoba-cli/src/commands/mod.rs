pub mod config_ops;
pub mod conjugate_ops;
pub mod counter_ops;
pub mod drill_ops;
pub mod kana_ops;
pub mod vocab_ops;
