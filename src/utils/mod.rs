pub mod debounce;
pub mod echarts_ffi;
pub mod format;
