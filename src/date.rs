// src/date.rs
//! 게시판 날짜 문자열 → 기준 시각(KST 09:00) 변환.
use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Asia::Seoul;
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

/// 공지 게시 시각 (Asia/Seoul 기준)
pub type Timestamp = DateTime<Tz>;

/// 게시판은 시각을 거의 안 알려주므로 모든 글을 현지 09:00 으로 고정
pub const PUBLISH_HOUR: u32 = 9;

// 연.월.일 / 연/월/일 / 연-월-일 (연 4자리, 월·일 1~2자리). 순서는 Y-M-D 만.
static YMD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})[./-]([0-9]{1,2})[./-]([0-9]{1,2})").expect("valid date regex")
});

/// 텍스트 어딘가에 날짜처럼 생긴 부분이 있는지 (공백 제거 없이 그대로 검사)
pub fn looks_like_date(text: &str) -> bool {
    YMD.is_match(text)
}

/// 날짜 문자열을 Asia/Seoul 현지 09:00:00 시각으로 변환한다.
///
/// 공백을 전부 지운 뒤 처음 나오는 `YYYY.MM.DD`/`YYYY/MM/DD`/`YYYY-MM-DD`
/// 패턴을 쓴다. 패턴이 없거나 달력에 없는 날짜(0년, 13월, 32일 등)면 `None`.
/// 오프셋은 그 날짜의 tz 데이터를 따른다 (1988년 서머타임이면 +10:00).
pub fn parse_kr_date(text: &str) -> Option<Timestamp> {
    let compact: String = text.split_whitespace().collect();
    if compact.is_empty() {
        return None;
    }

    let caps = YMD.captures(&compact)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    // 범위 검사는 달력 생성에 맡긴다. chrono 는 0년도 받지만 서력 0년은 없음
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|d| d.year() >= 1)?
        .and_hms_opt(PUBLISH_HOUR, 0, 0)?
        .and_local_timezone(Seoul)
        .single()
}
