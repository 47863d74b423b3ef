mod files;
mod properties;
mod stability;
