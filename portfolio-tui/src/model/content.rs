//! 页面内容与文档构建
//!
//! 终端里没有真实的 DOM：这里把作品集页面排成一列内容块，
//! 每个块对应 `Document` 中的一个元素，按行高换算成文档单位。
//! 控制器只看到 `Document`，View 层按块渲染。

use portfolio_core::document::Element;
use portfolio_core::types::{ElementId, FieldId, NotificationKind, PageLayout, Viewport};
use portfolio_core::Document;

/// 每个终端行对应的文档单位
pub const ROW_UNITS: f64 = 20.0;
/// 每个终端列对应的文档单位
pub const COLUMN_UNITS: f64 = 10.0;

/// 顶部导航栏占用的行数（含边框）
pub const NAVBAR_ROWS: u16 = 3;
/// 底部状态栏占用的行数
pub const STATUS_ROWS: u16 = 1;

/// 根据终端尺寸计算页面视口
pub fn viewport_for_terminal(columns: u16, rows: u16) -> Viewport {
    let page_rows = rows.saturating_sub(NAVBAR_ROWS + STATUS_ROWS);
    Viewport::new(
        f64::from(columns) * COLUMN_UNITS,
        f64::from(page_rows) * ROW_UNITS,
    )
}

/// 表单输入框（含不校验的主题字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// 表单顺序
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// 需要校验的字段
    pub fn validated(self) -> Option<FieldId> {
        match self {
            Self::Name => Some(FieldId::Name),
            Self::Email => Some(FieldId::Email),
            Self::Message => Some(FieldId::Message),
            Self::Subject => None,
        }
    }

    pub fn element(self) -> ElementId {
        match self.validated() {
            Some(field) => field.element(),
            None => ElementId::new("subject"),
        }
    }
}

/// 内容块类型，决定 View 层如何渲染
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Text,
    /// 打字机效果的标题，文字取自元素文本
    HeroTitle,
    ProfileImage,
    /// 视差图形，叠加绘制，不占行
    Shape,
    OrbitIcon,
    /// 可揭示的卡片（技能、经历、证书……）
    Card,
    Field(FormField),
    FieldError(FieldId),
    SubmitButton,
    Notification(NotificationKind),
}

/// 一个内容块
#[derive(Debug, Clone)]
pub struct Block {
    pub id: ElementId,
    /// 所属区块
    pub section: ElementId,
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

/// 构建结果
pub struct Page {
    pub document: Document,
    pub blocks: Vec<Block>,
}

impl Page {
    /// 覆盖文档位置 `doc_y` 的内容块
    pub fn block_at(&self, doc_y: f64) -> Option<&Block> {
        self.blocks.iter().find(|b| {
            b.kind != BlockKind::Shape
                && self
                    .document
                    .element(&b.id)
                    .is_some_and(|e| doc_y >= e.rect.top && doc_y < e.rect.bottom())
        })
    }
}

struct PageBuilder {
    document: Document,
    blocks: Vec<Block>,
    top: f64,
    section: ElementId,
    section_top: f64,
}

impl PageBuilder {
    fn new(viewport: Viewport) -> Self {
        Self {
            document: Document::new(viewport),
            blocks: Vec::new(),
            top: 0.0,
            section: ElementId::new(""),
            section_top: 0.0,
        }
    }

    fn begin_section(&mut self, id: &ElementId) {
        self.section = id.clone();
        self.section_top = self.top;
        self.gap(1);
    }

    fn end_section(&mut self) {
        self.gap(1);
        let height = self.top - self.section_top;
        self.document
            .insert(Element::new(self.section.clone()).with_rect(self.section_top, height));
    }

    fn gap(&mut self, rows: u16) {
        self.top += f64::from(rows) * ROW_UNITS;
    }

    /// 在当前位置放置一个块并下移
    fn push(&mut self, id: impl Into<ElementId>, class: Option<&str>, kind: BlockKind, lines: Vec<String>) {
        let id = id.into();
        #[allow(clippy::cast_precision_loss)]
        let height = lines.len() as f64 * ROW_UNITS;

        let mut element = Element::new(id.clone()).with_rect(self.top, height);
        if let Some(class) = class {
            element = element.with_class(class);
        }
        self.document.insert(element);
        self.blocks.push(Block {
            id,
            section: self.section.clone(),
            kind,
            lines,
        });
        self.top += height;
    }

    /// 放置不占行的叠加块
    fn overlay(&mut self, id: impl Into<ElementId>, class: &str, kind: BlockKind, top: f64, glyph: &str) {
        let id = id.into();
        self.document
            .insert(Element::new(id.clone()).with_class(class).with_rect(top, 0.0));
        self.blocks.push(Block {
            id,
            section: self.section.clone(),
            kind,
            lines: vec![glyph.to_string()],
        });
    }

    /// 不渲染的辅助元素（导航、按钮子元素、遮罩……）
    fn chrome(&mut self, element: Element) {
        self.document.insert(element);
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(ToString::to_string).collect()
}

/// 打字机要打出的标题
pub fn hero_text(owner: &str) -> String {
    format!("Hi, I'm {owner}")
}

/// 构建作品集页面
pub fn build_page(layout: &PageLayout, viewport: Viewport, owner: &str) -> Page {
    let mut b = PageBuilder::new(viewport);

    // 固定元素
    b.chrome(Element::new(layout.navbar.clone()));
    b.chrome(Element::new(layout.hamburger.clone()));
    b.chrome(Element::new(layout.nav_menu.clone()));
    for entry in &layout.nav_entries {
        b.chrome(
            Element::new(entry.link.clone())
                .with_class("nav-link")
                .with_attribute("href", entry.target.fragment()),
        );
    }
    b.chrome(Element::new(layout.scroll_to_top.clone()).with_class("scroll-to-top"));
    b.chrome(Element::new(layout.preloader.clone()).with_class("preloader"));
    b.chrome(Element::new(layout.submit_label.clone()).with_text("Send Message"));
    b.chrome(Element::new(layout.submit_loader.clone()).with_class("hidden"));

    let sections = &layout.sections;
    let section = |i: usize| sections.get(i).cloned().unwrap_or_else(|| ElementId::new(""));

    // home
    b.begin_section(&section(0));
    let hero_top = b.top;
    b.push(layout.hero_title.clone(), None, BlockKind::HeroTitle, vec![String::new()]);
    b.push(
        "hero-subtitle",
        None,
        BlockKind::Text,
        lines(&["Systems engineer · Rust · distributed storage"]),
    );
    b.gap(1);
    b.push(
        layout.profile_image.clone(),
        None,
        BlockKind::ProfileImage,
        vec![String::new()],
    );
    if let Some(image) = b.document.element_mut(&layout.profile_image) {
        image
            .attributes
            .insert("src".to_string(), "assets/profile.jpg".to_string());
    }
    b.gap(1);
    for (i, name) in ["Rust", "Linux", "Cloud"].iter().enumerate() {
        b.push(
            format!("orbit-{i}"),
            Some(layout.orbit_icon_class.as_str()),
            BlockKind::OrbitIcon,
            vec![(*name).to_string()],
        );
    }
    for (i, glyph) in ["◆", "●", "▲"].iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let top = hero_top + (i as f64 + 1.0) * 3.0 * ROW_UNITS;
        b.overlay(format!("shape-{i}"), &layout.shape_class, BlockKind::Shape, top, glyph);
    }
    b.end_section();

    // about
    b.begin_section(&section(1));
    b.push("about-heading", None, BlockKind::Heading, lines(&["About Me"]));
    b.push(
        "about-text",
        None,
        BlockKind::Text,
        lines(&[
            "I build reliable backend systems and the tooling around them.",
            "Lately: storage engines, async runtimes and developer experience.",
        ]),
    );
    b.gap(1);
    for (i, text) in [
        "10+ years shipping production software",
        "Open-source maintainer",
        "Speaker at regional meetups",
    ]
    .iter()
    .enumerate()
    {
        b.push(
            format!("about-highlight-{i}"),
            Some("highlight-item"),
            BlockKind::Card,
            vec![format!("✦ {text}")],
        );
    }
    b.end_section();

    // experience
    b.begin_section(&section(2));
    b.push("experience-heading", None, BlockKind::Heading, lines(&["Experience"]));
    for (i, (role, place)) in [
        ("Senior Engineer", "Storage Platform · 2021 - now"),
        ("Software Engineer", "Payments Infrastructure · 2017 - 2021"),
    ]
    .iter()
    .enumerate()
    {
        b.push(
            format!("timeline-{i}"),
            Some("timeline-item"),
            BlockKind::Card,
            vec![format!("● {place}")],
        );
        b.push(
            format!("exp-card-{i}"),
            Some("experience-card"),
            BlockKind::Card,
            vec![format!("  {role}"), "  Led design reviews and on-call rotations".to_string()],
        );
        b.gap(1);
    }
    b.end_section();

    // skills
    b.begin_section(&section(3));
    b.push("skills-heading", None, BlockKind::Heading, lines(&["Skills"]));
    for (i, skill) in ["Rust", "Distributed systems", "PostgreSQL", "Kubernetes"]
        .iter()
        .enumerate()
    {
        b.push(
            format!("skill-{i}"),
            Some("skill-card"),
            BlockKind::Card,
            vec![format!("▸ {skill}")],
        );
    }
    b.end_section();

    // certifications
    b.begin_section(&section(4));
    b.push(
        "certifications-heading",
        None,
        BlockKind::Heading,
        lines(&["Certifications"]),
    );
    for (i, cert) in [
        "Certified Kubernetes Administrator",
        "AWS Solutions Architect",
        "Linux Foundation Sysadmin",
    ]
    .iter()
    .enumerate()
    {
        b.push(
            format!("cert-{i}"),
            Some("cert-card"),
            BlockKind::Card,
            vec![format!("✓ {cert}")],
        );
    }
    b.end_section();

    // contact
    b.begin_section(&section(5));
    b.push("contact-heading", None, BlockKind::Heading, lines(&["Get In Touch"]));
    for field in FormField::ALL {
        b.push(field.element(), None, BlockKind::Field(field), vec![String::new()]);
        if let Some(id) = field.validated() {
            b.push(id.error_element(), None, BlockKind::FieldError(id), vec![String::new()]);
        }
    }
    b.gap(1);
    b.push(
        layout.submit_button.clone(),
        Some("btn"),
        BlockKind::SubmitButton,
        vec![String::new()],
    );
    for kind in [NotificationKind::Success, NotificationKind::Failure] {
        b.push(
            kind.element(),
            Some("hidden"),
            BlockKind::Notification(kind),
            vec![String::new()],
        );
    }
    b.end_section();

    Page {
        document: b.document,
        blocks: b.blocks,
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core::PageSurface;

    use super::*;

    fn page() -> Page {
        build_page(&PageLayout::default(), Viewport::new(1200.0, 600.0), "Ada")
    }

    #[test]
    fn viewport_excludes_chrome_rows() {
        let v = viewport_for_terminal(100, 30);
        assert!((v.width - 1000.0).abs() < f64::EPSILON);
        assert!((v.height - 26.0 * ROW_UNITS).abs() < f64::EPSILON);
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let page = page();
        let layout = PageLayout::default();

        let rects: Vec<_> = layout
            .sections
            .iter()
            .map(|id| page.document.rect(id).unwrap())
            .collect();
        for pair in rects.windows(2) {
            assert!((pair[0].bottom() - pair[1].top).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn every_layout_element_exists() {
        let page = page();
        let layout = PageLayout::default();

        for id in layout
            .sections
            .iter()
            .chain(layout.nav_entries.iter().map(|e| &e.link))
            .chain([
                &layout.navbar,
                &layout.hamburger,
                &layout.nav_menu,
                &layout.submit_button,
                &layout.submit_label,
                &layout.submit_loader,
                &layout.subject_field,
                &layout.preloader,
                &layout.hero_title,
                &layout.profile_image,
            ])
        {
            assert!(page.document.contains(id), "missing {id}");
        }
        for field in FieldId::ALL {
            assert!(page.document.contains(&field.error_element()));
        }
    }

    #[test]
    fn block_at_finds_cards() {
        let page = page();
        let rect = page.document.rect(&ElementId::new("skill-2")).unwrap();

        let block = page.block_at(rect.top + 1.0).unwrap();
        assert_eq!(block.id.as_str(), "skill-2");
        assert_eq!(block.section.as_str(), "skills");
    }
}
