//src/lib.rs
pub mod config;
pub mod crawler;
pub mod date;
pub mod error;
pub mod extract;
pub mod feed;
pub mod logging;
pub mod notice;
pub mod schools;
pub mod storage;

use select::document::Document;
use tracing::{info, warn};

pub use config::Settings;
pub use error::FeedError;
pub use notice::{NoticeItem, NoticeList};

/// 한 번 실행 결과
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub items: usize,
    pub output: std::path::PathBuf,
}

/// 게시판 1페이지 → 공지 추출 → RSS → 파일. 네트워크/파일 오류만 실패로 돌려준다.
pub fn run(settings: &Settings) -> Result<RunSummary, FeedError> {
    let body = match &settings.html_file {
        Some(path) => crawler::read_page(path)?,
        None => crawler::fetch_page(settings)?,
    };

    let document = Document::from(body.as_str());
    let notices = extract::extract_items(&document, &settings.base_url, settings.max_items);
    if notices.is_empty() {
        warn!(url = %settings.base_url, "공지 항목을 찾지 못했습니다. 선택자 점검 필요.");
    } else {
        info!(count = notices.len(), "공지 추출 완료");
    }

    let meta = feed::FeedMeta::for_tukorea(settings);
    let channel = feed::create_rss(&meta, &notices);
    storage::save_rss_xml(&channel, &settings.output)?;

    Ok(RunSummary {
        items: notices.len(),
        output: settings.output.clone(),
    })
}
