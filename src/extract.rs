// src/extract.rs
//! 게시판 HTML 에서 공지 목록을 추정해서 뽑아낸다.
//!
//! 페이지 구조가 자주 바뀌므로 특정 클래스에 묶이지 않고, 단계별 추정을 순서대로 시도한다.
//! 1) 표 형태: `table tbody tr`
//! 2) 리스트 형태: `ul li`, `.post-list li`, `.board-list li` (1단계가 0건일 때만)
//!
//! 어느 단계에서 나왔든 마지막엔 [`NoticeList::from_candidates`] 로 정렬·자르기를 한다.
use select::document::Document;
use select::node::Node;
use select::predicate::{Attr, Class, Name, Predicate};
use tracing::{debug, info};
use url::Url;

use crate::date::{looks_like_date, parse_kr_date};
use crate::notice::{NoticeItem, NoticeList};

type Strategy = fn(&Document, &Url) -> Vec<NoticeItem>;

/// 시도 순서대로. 처음으로 비어 있지 않은 결과를 쓴다.
const STRATEGIES: [(&str, Strategy); 2] = [
    ("table", extract_table_rows),
    ("list", extract_list_items),
];

pub fn extract_items(document: &Document, base_url: &Url, max_items: usize) -> NoticeList {
    for (tier, strategy) in STRATEGIES {
        let found = strategy(document, base_url);
        if !found.is_empty() {
            info!(tier, candidates = found.len(), "공지 후보 발견");
            return NoticeList::from_candidates(found, max_items);
        }
        debug!(tier, "후보 없음, 다음 단계로");
    }
    NoticeList::default()
}

/* ───────────── 1단계: 표 ───────────── */

fn extract_table_rows(document: &Document, base_url: &Url) -> Vec<NoticeItem> {
    let mut notices = Vec::new();

    for tr in document.find(Name("table").descendant(Name("tbody")).descendant(Name("tr"))) {
        let Some((title, link)) = title_and_link(&tr, base_url) else {
            continue;
        };

        // 날짜: 오른쪽 칸부터 "날짜처럼 보이는" 첫 칸
        let cells: Vec<_> = tr.find(Name("td")).collect();
        let published = cells
            .iter()
            .rev()
            .map(stripped_text)
            .find(|t| looks_like_date(t))
            .and_then(|t| parse_kr_date(&t));

        notices.push(NoticeItem::new(title, link, published));
    }

    notices
}

/* ───────────── 2단계: 리스트 ───────────── */

fn extract_list_items(document: &Document, base_url: &Url) -> Vec<NoticeItem> {
    let lis = Name("ul")
        .descendant(Name("li"))
        .or(Class("post-list").descendant(Name("li")))
        .or(Class("board-list").descendant(Name("li")));

    let mut notices = Vec::new();

    for li in document.find(lis) {
        let Some((title, link)) = title_and_link(&li, base_url) else {
            continue;
        };

        // 날짜: class 에 date/time 이 들어간 첫 하위 요소
        let published = li
            .find(DateClass)
            .next()
            .and_then(|el| parse_kr_date(&stripped_text(&el)));

        notices.push(NoticeItem::new(title, link, published));
    }

    notices
}

/* ───────────── 공통 유틸 ───────────── */

/// 행/항목 안에서 텍스트가 있는 첫 `a[href]` 로 (제목, 절대 URL).
/// 첨부 아이콘처럼 글자 없는 링크는 넘어간다. 쓸 링크가 없으면 `None` → 그 후보는 건너뜀
fn title_and_link(container: &Node, base_url: &Url) -> Option<(String, String)> {
    let (a, title) = container
        .find(Name("a").and(Attr("href", ())))
        .map(|a| {
            let title = stripped_text(&a);
            (a, title)
        })
        .find(|(_, title)| !title.is_empty())?;
    let href = a.attr("href").unwrap_or("");

    match resolve_link(base_url, href) {
        Some(link) => Some((title, link)),
        None => {
            debug!(href, "링크 해석 실패, 건너뜀");
            None
        }
    }
}

/// 상대 경로면 게시판 주소 기준으로 절대 URL 로
pub fn resolve_link(base_url: &Url, href: &str) -> Option<String> {
    base_url.join(href.trim()).ok().map(String::from)
}

/// 하위 텍스트 조각마다 앞뒤 공백을 자르고 이어 붙인다
fn stripped_text(node: &Node) -> String {
    node.descendants()
        .filter_map(|n| n.as_text())
        .map(str::trim)
        .collect()
}

/// class 값 중 하나라도 "date"/"time" 을 (대소문자 무시) 포함하는 요소
struct DateClass;

impl Predicate for DateClass {
    fn matches(&self, node: &Node) -> bool {
        node.attr("class")
            .map(|classes| {
                classes.split_whitespace().any(|c| {
                    let c = c.to_ascii_lowercase();
                    c.contains("date") || c.contains("time")
                })
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::MAX_ITEMS;

    const BASE: &str = "https://www.tukorea.ac.kr/tukorea/7607/subview.do";

    fn run(html: &str) -> NoticeList {
        let base = Url::parse(BASE).unwrap();
        extract_items(&Document::from(html), &base, MAX_ITEMS)
    }

    fn titles(list: &NoticeList) -> Vec<&str> {
        list.iter().map(|n| n.title.as_str()).collect()
    }

    fn items(list: &NoticeList) -> Vec<&NoticeItem> {
        list.iter().collect()
    }

    #[test]
    fn table_rows_in_order() {
        let html = r#"
            <table><thead><tr><th>번호</th><th>제목</th><th>작성일</th></tr></thead>
            <tbody>
              <tr><td>3</td><td class="td-subject"><a href="/bbs/tukorea/107/3/artclView.do"> 수강신청 안내 </a></td><td class="td-date">2024.03.03</td></tr>
              <tr><td>2</td><td><a href="/bbs/tukorea/107/2/artclView.do">등록금 납부</a></td><td>2024.03.02</td></tr>
              <tr><td>1</td><td><a href="/bbs/tukorea/107/1/artclView.do">휴학 신청</a></td><td>2024.03.01</td></tr>
            </tbody></table>"#;

        let list = run(html);
        assert_eq!(titles(&list), ["수강신청 안내", "등록금 납부", "휴학 신청"]);
        assert_eq!(
            items(&list)[0].link,
            "https://www.tukorea.ac.kr/bbs/tukorea/107/3/artclView.do"
        );
        let first = items(&list)[0].published.unwrap();
        assert_eq!(first.to_rfc3339(), "2024-03-03T09:00:00+09:00");
    }

    #[test]
    fn rows_without_link_are_skipped() {
        let html = r#"
            <table><tbody>
              <tr><td><a href="a.do">첫째</a></td><td>2024-01-03</td></tr>
              <tr><td>링크 없는 행</td><td>2024-01-02</td></tr>
              <tr><td><a href="c.do">셋째</a></td><td>2024-01-01</td></tr>
            </tbody></table>"#;

        let list = run(html);
        assert_eq!(list.len(), 2);
        assert_eq!(titles(&list), ["첫째", "셋째"]);
        assert_eq!(items(&list)[1].link, "https://www.tukorea.ac.kr/tukorea/7607/c.do");
    }

    #[test]
    fn table_date_is_rightmost_date_like_cell() {
        let html = r#"
            <table><tbody>
              <tr><td>2020.01.01</td><td><a href="/n/1">공지</a></td><td>2024.05.06</td><td>조회 12</td></tr>
              <tr><td><a href="/n/2">날짜 없음</a></td><td>학사팀</td></tr>
            </tbody></table>"#;

        let list = run(html);
        let dated = items(&list)[0];
        assert_eq!(dated.title, "공지");
        assert_eq!(dated.published.unwrap().to_rfc3339(), "2024-05-06T09:00:00+09:00");
        assert_eq!(items(&list)[1].published, None);
    }

    #[test]
    fn invalid_calendar_date_keeps_item_without_date() {
        let html = r#"
            <table><tbody>
              <tr><td><a href="/n/1">이상한 날짜</a></td><td>2024.13.40</td></tr>
            </tbody></table>"#;

        let list = run(html);
        assert_eq!(list.len(), 1);
        assert_eq!(items(&list)[0].published, None);
    }

    #[test]
    fn table_results_are_sorted() {
        let html = r#"
            <table><tbody>
              <tr><td><a href="/n/c">C</a></td><td></td></tr>
              <tr><td><a href="/n/b">B</a></td><td>2023-05-05</td></tr>
              <tr><td><a href="/n/a">A</a></td><td>2024-01-10</td></tr>
            </tbody></table>"#;

        assert_eq!(titles(&run(html)), ["A", "B", "C"]);
    }

    #[test]
    fn falls_back_to_list_when_no_rows() {
        let html = r#"
            <div class="board-list"><ul>
              <li><a href="/notice/1">장학 공지</a><span class="Date">2024-02-01</span></li>
              <li><a href="/notice/2">기숙사 공지</a><em class="reg-time">2024/02/03</em></li>
              <li>링크 없음</li>
            </ul></div>"#;

        let list = run(html);
        assert_eq!(titles(&list), ["기숙사 공지", "장학 공지"]);
        assert_eq!(items(&list)[1].link, "https://www.tukorea.ac.kr/notice/1");
    }

    #[test]
    fn list_is_ignored_when_table_has_items() {
        let html = r#"
            <ul><li><a href="/menu">메뉴</a></li></ul>
            <table><tbody><tr><td><a href="/n/1">표 공지</a></td></tr></tbody></table>"#;

        assert_eq!(titles(&run(html)), ["표 공지"]);
    }

    #[test]
    fn skips_untitled_links_within_a_row() {
        let html = r#"
            <table><tbody>
              <tr>
                <td><a href="/file/1"><img src="/img/clip.gif" alt="첨부"></a></td>
                <td><a href="/n/1">진짜 제목</a></td>
                <td>2024.01.01</td>
              </tr>
              <tr><td><a href="/file/2"><img src="/img/clip.gif"></a></td><td>2024.01.02</td></tr>
            </tbody></table>"#;

        let list = run(html);
        assert_eq!(titles(&list), ["진짜 제목"]);
        assert_eq!(items(&list)[0].link, "https://www.tukorea.ac.kr/n/1");
        assert!(items(&list)[0].published.is_some());
    }

    #[test]
    fn bare_table_rows_count_as_table_tier() {
        // HTML5 파서가 <tbody> 를 채워 넣으므로 tbody 없는 표도 1단계에 걸리고, 리스트는 안 본다
        let html = r#"
            <table><tr><td><a href="/layout/home">홈</a></td></tr></table>
            <div class="board-list"><ul>
              <li><a href="/notice/1">리스트 공지</a><span class="date">2024-02-01</span></li>
            </ul></div>"#;

        let list = run(html);
        assert_eq!(titles(&list), ["홈"]);
        assert_eq!(items(&list)[0].link, "https://www.tukorea.ac.kr/layout/home");
    }

    #[test]
    fn thead_only_table_falls_through_to_list() {
        let html = r#"
            <table><thead><tr><th><a href="/sort?by=date">작성일</a></th></tr></thead></table>
            <div class="board-list"><ul>
              <li><a href="/notice/1">리스트 공지</a><span class="date">2024-02-01</span></li>
            </ul></div>"#;

        assert_eq!(titles(&run(html)), ["리스트 공지"]);
    }

    #[test]
    fn list_item_without_date_element() {
        let html = r#"<ul class="post-list"><li><a href="x">날짜 모름</a> 2024-01-01</li></ul>"#;

        let list = run(html);
        assert_eq!(list.len(), 1);
        assert_eq!(items(&list)[0].published, None);
    }

    #[test]
    fn nothing_found_is_empty_not_error() {
        assert!(run("<html><body><p>점검 중</p></body></html>").is_empty());
    }

    #[test]
    fn resolves_relative_links() {
        let base = Url::parse("https://example.org/board").unwrap();
        assert_eq!(
            resolve_link(&base, "/notice/123").as_deref(),
            Some("https://example.org/notice/123")
        );
        assert_eq!(
            resolve_link(&base, "view.do?id=7").as_deref(),
            Some("https://example.org/view.do?id=7")
        );
        assert_eq!(
            resolve_link(&base, "https://other.example/a").as_deref(),
            Some("https://other.example/a")
        );
    }

    #[test]
    fn caps_at_max_items() {
        let rows: String = (1..=40)
            .map(|i| {
                let day = (i % 28) + 1;
                format!(r#"<tr><td><a href="/n/{i}">공지 {i}</a></td><td>2024-01-{day:02}</td></tr>"#)
            })
            .collect();
        let html = format!("<table><tbody>{rows}</tbody></table>");

        assert_eq!(run(&html).len(), MAX_ITEMS);
    }
}
