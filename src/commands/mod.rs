pub mod estimate;
pub mod init;
pub mod presets;
