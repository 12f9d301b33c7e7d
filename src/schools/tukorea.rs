// src/schools/tukorea.rs
//! 한국공학대학교 공지사항 게시판 프로필.

/// 공지사항 목록 페이지 (상대 링크 해석 기준)
pub const BASE_URL: &str = "https://www.tukorea.ac.kr/tukorea/7607/subview.do";

/// 생성된 feed.xml 이 배포되는 주소 (atom:link rel="self")
pub const SELF_FEED_URL: &str = "https://shinjuku7.github.io/shinjuku7/feed.xml";

pub const OUTPUT_PATH: &str = "docs/feed.xml";

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; TU-Korea-RSS/1.0; +https://github.com/)";

pub const FEED_TITLE: &str = "한국공학대 공지사항";
pub const FEED_DESCRIPTION: &str = "한국공학대 공지사항 비공식 RSS";
pub const FEED_LANGUAGE: &str = "ko-kr";
