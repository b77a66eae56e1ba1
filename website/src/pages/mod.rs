pub mod extension_detail;
pub mod home;
