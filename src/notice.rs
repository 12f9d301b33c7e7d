// src/notice.rs
use crate::date::Timestamp;

/// 피드 항목 최대 개수 기본값
pub const MAX_ITEMS: usize = 30;

/// 게시판에서 찾은 공지 1건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeItem {
    pub title: String,
    /// 절대 URL (피드 guid 로도 쓴다)
    pub link: String,
    pub published: Option<Timestamp>,
}

impl NoticeItem {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        published: Option<Timestamp>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published,
        }
    }
}

/// 정렬·개수 제한까지 끝난 최종 목록.
///
/// 날짜 있는 글이 항상 먼저 오고(최신순), 날짜 없는 글은 발견 순서 그대로 뒤에 붙는다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeList(Vec<NoticeItem>);

impl NoticeList {
    pub fn from_candidates(items: Vec<NoticeItem>, max_items: usize) -> Self {
        let (mut dated, undated): (Vec<_>, Vec<_>) =
            items.into_iter().partition(|n| n.published.is_some());

        // sort_by 는 안정 정렬이라 같은 날짜끼리는 원래 순서 유지
        dated.sort_by(|a, b| b.published.cmp(&a.published));

        let mut combined = dated;
        combined.extend(undated);
        combined.truncate(max_items);
        Self(combined)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoticeItem> {
        self.0.iter()
    }
}
