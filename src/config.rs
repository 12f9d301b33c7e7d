// src/config.rs
//! 실행 단위 설정. 모든 값은 플래그 또는 환경변수로 덮어쓸 수 있다.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::logging::LogFormat;
use crate::notice::MAX_ITEMS;
use crate::schools::tukorea;

#[derive(Debug, Clone, Parser)]
#[command(name = "tukorea-rss", version, about = "한국공학대 공지사항 → RSS 피드 생성")]
pub struct Settings {
    /// 공지사항 목록 페이지 (상대 링크 기준 주소)
    #[arg(long, env = "NOTICE_BASE_URL", default_value = tukorea::BASE_URL)]
    pub base_url: Url,

    /// 배포될 피드 자신의 주소
    #[arg(long, env = "NOTICE_SELF_URL", default_value = tukorea::SELF_FEED_URL)]
    pub self_url: Url,

    /// 결과 feed.xml 경로 (매번 통째로 덮어씀)
    #[arg(long, env = "NOTICE_OUTPUT", default_value = tukorea::OUTPUT_PATH)]
    pub output: PathBuf,

    #[arg(long, env = "NOTICE_MAX_ITEMS", default_value_t = MAX_ITEMS)]
    pub max_items: usize,

    #[arg(long, env = "NOTICE_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,

    #[arg(long, env = "NOTICE_USER_AGENT", default_value = tukorea::USER_AGENT)]
    pub user_agent: String,

    /// 지정하면 네트워크 대신 이 HTML 파일을 파싱 (선택자 점검용)
    #[arg(long, env = "NOTICE_HTML_FILE")]
    pub html_file: Option<PathBuf>,

    #[arg(long, env = "NOTICE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
