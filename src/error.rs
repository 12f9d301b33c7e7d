// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// 실행을 멈추는 오류들. 추출/날짜 파싱은 여기 해당하지 않는다 (항상 성공).
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("게시판 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTML 파일을 읽을 수 없음 ({}): {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("피드 파일 쓰기 실패 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("RSS 직렬화 실패: {0}")]
    Rss(#[from] rss::Error),
}
