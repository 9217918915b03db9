use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use super::context::BuildContext;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    pub port: u16,
    pub hot: bool,
    pub allowed_hosts: String,
    pub dev_middleware: DevMiddleware,
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
    pub headers: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevMiddleware {
    pub write_to_disk: bool,
}

/// Dev server options; only the script build serves.
pub fn dev_server(ctx: &BuildContext) -> Option<DevServerConfig> {
    if !ctx.project.dev_server || ctx.is_module {
        return None;
    }

    let mut headers = IndexMap::new();
    headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

    Some(DevServerConfig {
        port: ctx.project.dev_server_port,
        hot: ctx.project.hot,
        allowed_hosts: "all".to_string(),
        dev_middleware: DevMiddleware {
            write_to_disk: true,
        },
        static_dir: ctx.dist_dir(),
        headers,
    })
}
