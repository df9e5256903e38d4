#[cfg(target_os = "macos")]
mod app;
