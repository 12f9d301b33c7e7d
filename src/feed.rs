// src/feed.rs
// RSS 생성
use chrono::Utc;
use rss::extension::atom::{AtomExtension, Link};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::config::Settings;
use crate::error::FeedError;
use crate::notice::{NoticeItem, NoticeList};
use crate::schools::tukorea;

/// 채널 머리 정보
#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub title: String,
    /// 원본 게시판 주소 (alternate)
    pub link: String,
    /// 피드 자신의 주소 (atom:link rel="self")
    pub self_link: String,
    pub description: String,
    pub language: String,
}

impl FeedMeta {
    pub fn for_tukorea(settings: &Settings) -> Self {
        Self {
            title: tukorea::FEED_TITLE.to_string(),
            link: settings.base_url.to_string(),
            self_link: settings.self_url.to_string(),
            description: tukorea::FEED_DESCRIPTION.to_string(),
            language: tukorea::FEED_LANGUAGE.to_string(),
        }
    }
}

pub fn create_rss(meta: &FeedMeta, notices: &NoticeList) -> Channel {
    let items = notices.iter().map(to_item).collect::<Vec<_>>();

    let mut self_link = Link::default();
    self_link.set_href(meta.self_link.clone());
    self_link.set_rel("self");
    self_link.set_mime_type(Some("application/rss+xml".to_string()));

    let mut atom = AtomExtension::default();
    atom.set_links(vec![self_link]);

    ChannelBuilder::default()
        .title(meta.title.clone())
        .link(meta.link.clone())
        .description(meta.description.clone())
        .language(Some(meta.language.clone()))
        .last_build_date(Some(Utc::now().to_rfc2822()))
        .generator(Some(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )))
        .atom_ext(Some(atom))
        .items(items)
        .build()
}

fn to_item(notice: &NoticeItem) -> Item {
    // guid 는 링크 그대로, 영구 링크로 간주하지 않음
    let guid = GuidBuilder::default()
        .value(notice.link.clone())
        .permalink(false)
        .build();

    ItemBuilder::default()
        .title(Some(notice.title.clone()))
        .link(Some(notice.link.clone()))
        .guid(Some(guid))
        .pub_date(notice.published.map(|dt| dt.to_rfc2822()))
        .build()
}

/// 들여쓰기 2칸 XML 바이트로
pub fn to_xml_bytes(channel: &Channel) -> Result<Vec<u8>, FeedError> {
    Ok(channel.pretty_write_to(Vec::new(), b' ', 2)?)
}
