use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_dev_server_port() -> u16 {
    8000
}

pub(crate) fn default_js_filename() -> String {
    "js/[name].js".to_string()
}

pub(crate) fn default_js_chunk_filename() -> String {
    "js/[name].[contenthash].chunk.js".to_string()
}

pub(crate) fn default_css_filename() -> String {
    "css/[name].css".to_string()
}

pub(crate) fn default_block_filename() -> String {
    "blocks/[name].js".to_string()
}

pub(crate) fn default_block_css_filename() -> String {
    "blocks/[name].css".to_string()
}

pub(crate) fn default_blocks_dir() -> PathBuf {
    PathBuf::from("./includes/blocks/")
}

pub(crate) fn default_dist_dir() -> PathBuf {
    PathBuf::from("./dist/")
}

pub(crate) fn default_copy_assets_dir() -> PathBuf {
    PathBuf::from("./assets/")
}
