// src/storage.rs
use std::fs;
use std::path::Path;

use rss::Channel;
use tracing::info;

use crate::error::FeedError;
use crate::feed::to_xml_bytes;

/// 피드를 파일로 저장 (상위 디렉터리가 없으면 만들고, 내용은 통째로 교체)
pub fn save_rss_xml(channel: &Channel, path: &Path) -> Result<(), FeedError> {
    let io_err = |source: std::io::Error| FeedError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let xml = to_xml_bytes(channel)?;
    fs::write(path, &xml).map_err(io_err)?;
    info!(path = %path.display(), bytes = xml.len(), "피드 저장");
    Ok(())
}
