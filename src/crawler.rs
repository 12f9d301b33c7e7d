// src/crawler.rs
use std::path::Path;

use encoding_rs::{Encoding, EUC_KR, UTF_8, WINDOWS_1252};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Settings;
use crate::error::FeedError;

/// 게시판 목록 페이지 1장을 받아 문자열로 디코딩
pub fn fetch_page(settings: &Settings) -> Result<String, FeedError> {
    let client = Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout())
        .build()?;

    fetch_with(&client, &settings.base_url)
}

fn fetch_with(client: &Client, url: &Url) -> Result<String, FeedError> {
    info!(%url, "게시판 요청");
    let res = client.get(url.clone()).send()?.error_for_status()?;

    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let status = res.status();
    let bytes = res.bytes()?;

    let (body, encoding) = decode_body(content_type.as_deref(), &bytes);
    info!(%status, bytes = bytes.len(), encoding = encoding.name(), "게시판 응답 수신");
    Ok(body)
}

/// 로컬 HTML 파일 (charset 정보가 없으므로 추정만 한다)
pub fn read_page(path: &Path) -> Result<String, FeedError> {
    let bytes = std::fs::read(path).map_err(|source| FeedError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let (body, encoding) = decode_body(None, &bytes);
    debug!(path = %path.display(), encoding = encoding.name(), "HTML 파일 읽음");
    Ok(body)
}

/// 응답 바이트를 문자열로.
///
/// Content-Type 의 charset 이 있고 ISO-8859-1 (서버가 모를 때 붙이는 기본값) 이 아니면 그걸 쓴다.
/// 아니면 UTF-8 로 읽히는지 보고, 안 되면 EUC-KR 로 본다.
pub fn decode_body(content_type: Option<&str>, bytes: &[u8]) -> (String, &'static Encoding) {
    let declared = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .filter(|enc| *enc != WINDOWS_1252);

    let encoding = declared.unwrap_or_else(|| sniff_encoding(bytes));
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = used.name(), "디코딩 중 깨진 문자 대체됨");
    }
    (text.into_owned(), used)
}

fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        EUC_KR
    }
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}
