//! Simulated storefront rendered from theme settings
//!
//! Rendering is a pure function of the settings, the viewport, the page and
//! the content overrides. Every colour, radius, padding and shadow in the
//! output is derived from a settings field, so the tree changes whenever the
//! settings do and never otherwise.

use shade_css::{font_stack, format_halves, format_hundredths};
use shade_theme::{with_alpha, ThemeSettings};
use tracing::debug;

use crate::content::ContentOverrides;
use crate::node::{button, div, el, img, p, span, PreviewNode};
use crate::viewport::{PreviewPage, Viewport};

const TAB_IDLE_TEXT: &str = "#94a3b8";
const TAB_BAR_BG: &str = "#334155";
const STAR_COLOR: &str = "#fbbf24";

const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];
const SWATCHES: [&str; 4] = ["Black", "White", "Navy", "Gray"];
const SELECTED_SIZE: &str = "M";
const SELECTED_SWATCH: &str = "Black";

struct Product {
    name: &'static str,
    price: &'static str,
    compare_at: Option<&'static str>,
    image: &'static str,
}

const FEATURED_COUNT: usize = 3;

const CATALOG: [Product; 6] = [
    Product {
        name: "Classic Tee",
        price: "$49.00",
        compare_at: Some("$65.00"),
        image: crate::content::DEFAULT_PRODUCT_IMAGE,
    },
    Product {
        name: "Denim Jacket",
        price: "$129.00",
        compare_at: None,
        image: "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=200&h=200&fit=crop",
    },
    Product {
        name: "Sneakers",
        price: "$89.00",
        compare_at: Some("$110.00"),
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=200&h=200&fit=crop",
    },
    Product {
        name: "Watch",
        price: "$199.00",
        compare_at: None,
        image: "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=200&h=200&fit=crop",
    },
    Product {
        name: "Backpack",
        price: "$79.00",
        compare_at: Some("$99.00"),
        image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=200&h=200&fit=crop",
    },
    Product {
        name: "Sunglasses",
        price: "$59.00",
        compare_at: None,
        image: "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=200&h=200&fit=crop",
    },
];

/// Home page of the storefront at `viewport`
pub fn render_preview(
    settings: &ThemeSettings,
    viewport: Viewport,
    content: &ContentOverrides,
) -> PreviewNode {
    render_page(settings, viewport, PreviewPage::Home, content)
}

/// One storefront page: tab bar, header, page body and footer in a frame
/// constrained to the viewport width
pub fn render_page(
    settings: &ThemeSettings,
    viewport: Viewport,
    page: PreviewPage,
    content: &ContentOverrides,
) -> PreviewNode {
    debug!(page = page.key(), viewport = viewport.key(), "Rendering storefront preview");
    let theme = Theme { s: settings };

    let body = match page {
        PreviewPage::Home => theme.home(content),
        PreviewPage::Product => theme.product_page(content),
        PreviewPage::Collection => theme.collection_page(),
        PreviewPage::Blog => theme.blog_page(content),
    };

    div()
        .class("preview-frame")
        .attr("data-viewport", viewport.key())
        .attr("data-page", page.key())
        .bg(&settings.background_color)
        .style("font-family", font_stack(&settings.font_family))
        .style("max-width", viewport.max_width())
        .style("margin", "0 auto")
        .style("overflow", "hidden")
        .child(theme.page_tabs(page))
        .child(theme.announcement_bar())
        .child(theme.header(viewport, content))
        .child(body)
        .child(theme.footer(content))
}

/// Settings plus the derived style values every section shares
struct Theme<'a> {
    s: &'a ThemeSettings,
}

impl Theme<'_> {
    fn radius(&self) -> i32 {
        self.s.border_radius
    }

    fn half_radius(&self) -> String {
        format!("{}px", format_halves(self.s.border_radius))
    }

    fn gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.s.primary_color, self.s.secondary_color
        )
    }

    fn button_shadow(&self) -> String {
        format!(
            "0 4px {}px rgba(102, 126, 234, {})",
            format_halves(self.s.shadow_intensity),
            format_hundredths(i64::from(self.s.shadow_intensity))
        )
    }

    /// 1px border in the muted colour at the given alpha byte
    fn hairline(&self, alpha: u8) -> String {
        format!("1px solid {}", with_alpha(&self.s.muted_text_color, alpha))
    }

    fn header_bg(&self) -> &str {
        or_fallback(&self.s.header_bg, &self.s.background_color)
    }

    fn primary_button(&self, label: &str, padding: String, font_size: &'static str) -> PreviewNode {
        button()
            .class("btn-primary")
            .background(self.gradient())
            .rounded(self.radius())
            .padding(padding)
            .font_weight(600)
            .color("white")
            .border("none")
            .font_size(font_size)
            .style("cursor", "pointer")
            .text(label)
    }

    fn heading(&self, tag: &'static str, text: &str, size: &'static str, weight: u16) -> PreviewNode {
        el(tag)
            .color(&self.s.heading_color)
            .font_size(size)
            .font_weight(weight)
            .text(text)
    }

    fn link(&self, text: &str) -> PreviewNode {
        span()
            .class("link")
            .color(&self.s.link_color)
            .style("cursor", "pointer")
            .text(text)
    }

    fn muted(&self, text: &str, size: &'static str) -> PreviewNode {
        span().color(&self.s.muted_text_color).font_size(size).text(text)
    }

    fn breadcrumb(&self, links: &[&str], current: &str) -> PreviewNode {
        let mut trail = div().class("breadcrumb").color(&self.s.muted_text_color).font_size("0.75rem");
        for link in links {
            trail = trail.child(self.link(link)).child(span().text(" › "));
        }
        trail.child(span().text(current))
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    fn page_tabs(&self, active: PreviewPage) -> PreviewNode {
        div()
            .class("page-tabs")
            .bg(TAB_BAR_BG)
            .padding("6px 8px")
            .children(PreviewPage::ALL.into_iter().map(|page| {
                let tab = button()
                    .class(if page == active { "page-tab active" } else { "page-tab" })
                    .rounded(4)
                    .font_size("0.75rem")
                    .border("none");
                if page == active {
                    tab.bg(&self.s.primary_color).color("white").text(page.label())
                } else {
                    tab.bg("transparent").color(TAB_IDLE_TEXT).text(page.label())
                }
            }))
    }

    fn announcement_bar(&self) -> PreviewNode {
        div()
            .class("announcement-bar")
            .background(format!(
                "linear-gradient(90deg, {}, {})",
                self.s.primary_color, self.s.secondary_color
            ))
            .color("white")
            .font_size("0.75rem")
            .style("text-align", "center")
            .padding("8px 16px")
            .text("Free shipping on orders over $50! ")
            .child(span().style("text-decoration", "underline").text("Shop now"))
    }

    fn header(&self, viewport: Viewport, content: &ContentOverrides) -> PreviewNode {
        let brand = div()
            .class("header-brand")
            .child_opt(
                viewport
                    .is_compact()
                    .then(|| span().class("menu-icon").color(&self.s.heading_color).text("☰")),
            )
            .child(
                span()
                    .class("store-name")
                    .color(&self.s.heading_color)
                    .font_weight(700)
                    .font_size("1.1rem")
                    .text(content.store_name()),
            );

        let nav = (!viewport.is_compact()).then(|| {
            div()
                .class("nav-links")
                .children(["Shop", "Collections", "About", "Contact"].map(|label| self.link(label)))
        });

        let actions = div()
            .class("header-actions")
            .child(span().class("icon-search").color(&self.s.muted_text_color).text("⌕"))
            .child(span().class("icon-account").color(&self.s.muted_text_color).text("◯"))
            .child(
                span()
                    .class("cart")
                    .color(&self.s.heading_color)
                    .text("🛒")
                    .child(
                        span()
                            .class("cart-count")
                            .bg(&self.s.primary_color)
                            .color("white")
                            .font_size("10px")
                            .style("border-radius", "9999px")
                            .text("2"),
                    ),
            );

        div()
            .class("site-header")
            .bg(self.header_bg())
            .style("border-bottom", self.hairline(0x30))
            .padding("12px 16px")
            .style("display", "flex")
            .style("justify-content", "space-between")
            .child(brand)
            .child_opt(nav)
            .child(actions)
    }

    fn footer(&self, content: &ContentOverrides) -> PreviewNode {
        let columns = [
            ("Shop", ["All Products", "New Arrivals"]),
            ("Help", ["Contact Us", "FAQs"]),
            ("About", ["Our Story", "Blog"]),
        ];

        div()
            .class("site-footer")
            .bg(or_fallback(&self.s.footer_bg, &self.s.heading_color))
            .color(or_fallback(&self.s.footer_text, &self.s.background_color))
            .padding("16px")
            .child(div().class("footer-columns").children(columns.map(|(title, links)| {
                div()
                    .class("footer-column")
                    .child(p().class("footer-title").font_weight(600).font_size("0.7rem").text(title))
                    .children(links.map(|link| {
                        p().class("footer-link").style("opacity", "0.7").font_size("0.65rem").text(link)
                    }))
            })))
            .child(
                div()
                    .class("footer-bottom")
                    .style(
                        "border-top",
                        format!("1px solid {}", with_alpha(&self.s.background_color, 0x20)),
                    )
                    .font_size("0.6rem")
                    .style("opacity", "0.6")
                    .text(format!("© 2024 {}. All rights reserved.", content.store_name())),
            )
    }

    // =========================================================================
    // Home
    // =========================================================================

    fn home(&self, content: &ContentOverrides) -> PreviewNode {
        let featured = CATALOG.iter().take(FEATURED_COUNT).enumerate().map(|(i, product)| {
            let image = if i == 0 { content.product_image() } else { product.image };
            self.product_card(product, image, false)
        });

        div()
            .class("page-home")
            .child(self.hero(content))
            .child(
                div()
                    .class("featured")
                    .padding("16px")
                    .child(self.heading("h2", "Featured Products", "1rem", 600))
                    .child(div().class("product-grid").children(featured)),
            )
            .child(self.newsletter())
    }

    fn hero(&self, content: &ContentOverrides) -> PreviewNode {
        let padding = self.s.button_padding;
        div()
            .class("hero")
            .background(format!(
                "linear-gradient(135deg, {}, {})",
                with_alpha(&self.s.primary_color, 0x15),
                with_alpha(&self.s.secondary_color, 0x15)
            ))
            .padding("32px 20px")
            .style("text-align", "center")
            .child(self.heading("h1", content.hero_title(), "1.5rem", 700).class("hero-title"))
            .child(
                p().color(&self.s.muted_text_color)
                    .font_size("0.9rem")
                    .text("Discover our latest collection"),
            )
            .child(
                self.primary_button(
                    "Shop Collection",
                    format!("{}px {}px", scaled(padding, 7), scaled(padding, 15)),
                    "0.85rem",
                )
                .shadow(self.button_shadow()),
            )
    }

    fn product_card(&self, product: &Product, image: &str, sale_badge: bool) -> PreviewNode {
        let media = div()
            .class("product-media")
            .style("overflow", "hidden")
            .child(img(image, product.name))
            .child_opt((sale_badge && product.compare_at.is_some()).then(|| {
                span()
                    .class("sale-badge")
                    .background(format!(
                        "linear-gradient(135deg, {}, {})",
                        self.s.primary_color, self.s.secondary_color
                    ))
                    .color("white")
                    .font_size("0.5rem")
                    .style("border-radius", self.half_radius())
                    .font_weight(600)
                    .text("SALE")
            }));

        let price = div()
            .class("product-price")
            .child(
                span()
                    .class("price")
                    .color(&self.s.primary_color)
                    .font_weight(700)
                    .text(product.price),
            )
            .child_opt(product.compare_at.map(|compare| {
                span()
                    .class("price-compare")
                    .color(&self.s.muted_text_color)
                    .style("text-decoration", "line-through")
                    .text(compare)
            }));

        div()
            .class("product-card")
            .rounded(self.radius())
            .style("overflow", "hidden")
            .bg(&self.s.background_color)
            .shadow("0 2px 8px rgba(0, 0, 0, 0.08)")
            .border(self.hairline(0x20))
            .child(media)
            .child(
                div()
                    .padding("8px")
                    .child(
                        p().class("product-title")
                            .color(&self.s.heading_color)
                            .font_weight(600)
                            .text(product.name),
                    )
                    .child(price),
            )
    }

    fn text_input(&self, placeholder: &str) -> PreviewNode {
        el("input")
            .attr("placeholder", placeholder)
            .rounded(self.radius())
            .border(self.hairline(0x50))
            .padding("8px 12px")
            .bg(&self.s.background_color)
            .color(&self.s.text_color)
    }

    fn newsletter(&self) -> PreviewNode {
        div()
            .class("newsletter")
            .bg(with_alpha(&self.s.muted_text_color, 0x10))
            .padding("16px")
            .child(self.heading("h3", "Newsletter", "0.85rem", 600))
            .child(
                div()
                    .class("newsletter-form")
                    .child(self.text_input("Enter your email").attr("type", "email"))
                    .child(self.primary_button("Subscribe", "8px 16px".into(), "0.75rem")),
            )
    }

    // =========================================================================
    // Product
    // =========================================================================

    fn product_page(&self, content: &ContentOverrides) -> PreviewNode {
        let rating = div()
            .class("rating")
            .children((1..=5).map(|i| {
                span()
                    .class("star")
                    .color(STAR_COLOR)
                    .text(if i <= 4 { "★" } else { "☆" })
            }))
            .child(self.muted("(128 reviews)", "0.6rem"));

        let price = div()
            .class("product-price")
            .child(
                span()
                    .class("price")
                    .color(&self.s.primary_color)
                    .font_size("1.1rem")
                    .font_weight(700)
                    .text("$49.00"),
            )
            .child(
                span()
                    .class("price-compare")
                    .color(&self.s.muted_text_color)
                    .style("text-decoration", "line-through")
                    .text("$65.00"),
            )
            .child(
                span()
                    .class("badge")
                    .background(with_alpha(&self.s.primary_color, 0x15))
                    .color(&self.s.primary_color)
                    .style("border-radius", self.half_radius())
                    .font_weight(600)
                    .text("SALE"),
            );

        let swatches = div()
            .class("color-options")
            .child(self.option_label(&format!("Color: {SELECTED_SWATCH}")))
            .children(SWATCHES.map(|name| {
                let selected = name == SELECTED_SWATCH;
                span()
                    .class(if selected { "color-swatch selected" } else { "color-swatch" })
                    .attr("title", name)
                    .bg(name.to_lowercase())
                    .style("border-radius", "9999px")
                    .border(if selected {
                        format!("2px solid {}", self.s.primary_color)
                    } else {
                        format!("2px solid {}", with_alpha(&self.s.muted_text_color, 0x30))
                    })
            }));

        let sizes = div()
            .class("size-options")
            .child(self.option_label("Size"))
            .children(SIZES.map(|size| {
                let option = button()
                    .style("border-radius", self.half_radius())
                    .text(size);
                if size == SELECTED_SIZE {
                    option
                        .class("size-option selected")
                        .border(format!("1px solid {}", self.s.primary_color))
                        .bg(&self.s.primary_color)
                        .color("white")
                        .font_weight(600)
                } else {
                    option
                        .class("size-option")
                        .border(self.hairline(0x50))
                        .bg("transparent")
                        .color(&self.s.text_color)
                        .font_weight(400)
                }
            }));

        let quantity = div()
            .class("quantity")
            .child(self.option_label("Quantity"))
            .child(
                div()
                    .class("quantity-stepper")
                    .border(self.hairline(0x30))
                    .rounded(self.radius())
                    .children(["−", "1", "+"].map(|label| span().color(&self.s.text_color).text(label))),
            );

        let info = div()
            .class("product-info")
            .child(
                p().color(&self.s.muted_text_color)
                    .font_size("0.65rem")
                    .style("text-transform", "uppercase")
                    .text("Premium Collection"),
            )
            .child(self.heading("h1", "Classic Cotton Tee", "1rem", 700))
            .child(rating)
            .child(price)
            .child(swatches)
            .child(sizes)
            .child(quantity)
            .child(
                self.primary_button(
                    "Add to Cart",
                    format!("{}px", scaled(self.s.button_padding, 6)),
                    "0.75rem",
                )
                .class("btn-primary add-to-cart")
                .style("width", "100%")
                .shadow(self.button_shadow()),
            );

        div()
            .class("page-product")
            .padding("16px")
            .child(self.breadcrumb(&["Home", "Apparel"], "Classic Tee"))
            .child(
                div()
                    .class("product-layout")
                    .child(
                        div()
                            .class("product-gallery")
                            .rounded(self.radius())
                            .style("overflow", "hidden")
                            .child(img(content.product_image(), "Product")),
                    )
                    .child(info),
            )
            .child(
                div()
                    .class("product-description")
                    .style("border-top", self.hairline(0x20))
                    .child(self.heading("h3", "Description", "0.8rem", 600))
                    .child(p().color(&self.s.text_color).font_size("0.7rem").text(
                        "Premium cotton tee with a relaxed fit. Made from 100% organic cotton \
                         for ultimate comfort. Perfect for everyday wear.",
                    )),
            )
    }

    fn option_label(&self, text: &str) -> PreviewNode {
        p().color(&self.s.heading_color).font_size("0.7rem").font_weight(600).text(text)
    }

    // =========================================================================
    // Collection
    // =========================================================================

    fn collection_page(&self) -> PreviewNode {
        let select = |options: &[&str]| {
            el("select")
                .style("border-radius", self.half_radius())
                .border(self.hairline(0x30))
                .bg(&self.s.background_color)
                .color(&self.s.text_color)
                .children(options.iter().map(|o| el("option").text(*o)))
        };

        div()
            .class("page-collection")
            .padding("16px")
            .child(self.breadcrumb(&["Home"], "Summer Collection"))
            .child(self.heading("h1", "Summer Collection", "1.2rem", 700))
            .child(self.muted("24 products", "0.75rem"))
            .child(
                div()
                    .class("filter-bar")
                    .style("border-bottom", self.hairline(0x20))
                    .child(select(&["All Categories", "Tops", "Bottoms"]))
                    .child(select(&["Price: Low to High", "Price: High to Low", "Newest"])),
            )
            .child(
                div()
                    .class("product-grid collection-grid")
                    .children(CATALOG.iter().map(|product| self.product_card(product, product.image, true))),
            )
    }

    // =========================================================================
    // Blog
    // =========================================================================

    fn blog_page(&self, content: &ContentOverrides) -> PreviewNode {
        let meta = div()
            .class("article-meta")
            .child(
                span()
                    .class("tag")
                    .bg(with_alpha(&self.s.primary_color, 0x15))
                    .color(&self.s.primary_color)
                    .style("border-radius", self.half_radius())
                    .font_weight(500)
                    .text("Style Guide"),
            )
            .child(self.muted("Nov 28, 2024", "0.65rem"))
            .child(self.muted("5 min read", "0.65rem"));

        let author = div()
            .class("article-author")
            .child(span().class("avatar").bg(&self.s.primary_color).style("border-radius", "9999px"))
            .child(self.heading("p", "Sarah Johnson", "0.7rem", 600))
            .child(self.muted("Fashion Editor", "0.6rem"));

        let body = div()
            .class("article-body")
            .color(&self.s.text_color)
            .font_size("0.75rem")
            .style("line-height", "1.7")
            .child(p().text(
                "Summer is here, and it's time to refresh your wardrobe with some exciting new \
                 looks. Whether you're heading to the beach or a casual brunch, we've got you covered.",
            ))
            .child(self.heading("h2", "1. Layer Light Fabrics", "0.85rem", 600))
            .child(p().text(
                "Don't be afraid to layer even in summer. Light linens and cotton pieces can add \
                 depth to your outfit while keeping you cool.",
            ))
            .child(
                el("a")
                    .attr("href", "#")
                    .color(&self.s.link_color)
                    .font_weight(500)
                    .text("Shop Summer Collection →"),
            );

        let comments = div()
            .class("comments")
            .style("border-top", self.hairline(0x20))
            .child(self.heading("h3", "Comments (3)", "0.8rem", 600))
            .child(
                div()
                    .class("comment")
                    .bg(with_alpha(&self.s.muted_text_color, 0x10))
                    .rounded(self.radius())
                    .padding("12px")
                    .child(span().class("avatar").bg(&self.s.secondary_color).style("border-radius", "9999px"))
                    .child(self.heading("span", "Emily R.", "0.7rem", 600))
                    .child(self.muted("2 days ago", "0.6rem"))
                    .child(
                        p().color(&self.s.text_color)
                            .font_size("0.7rem")
                            .text("Love these tips! The layering idea is genius."),
                    ),
            )
            .child(
                div()
                    .class("comment-form")
                    .child(self.text_input("Add a comment...").attr("type", "text").border(self.hairline(0x30)))
                    .child(self.primary_button("Post", "8px 12px".into(), "0.7rem")),
            );

        div()
            .class("page-blog")
            .padding("16px")
            .child(self.breadcrumb(&["Home", "Blog"], "Style Guide"))
            .child(
                el("article")
                    .class("article")
                    .child(
                        div()
                            .class("article-image")
                            .rounded(self.radius())
                            .style("overflow", "hidden")
                            .child(img(content.hero_background(), "Blog")),
                    )
                    .child(meta)
                    .child(self.heading("h1", "10 Ways to Style Your Summer Wardrobe", "1.1rem", 700))
                    .child(author)
                    .child(body)
                    .child(comments),
            )
    }
}

/// `value`, or `fallback` when `value` is empty
fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// `px * tenths / 10` written exactly (`14`, `7` → `9.8`)
fn scaled(px: i32, tenths: i64) -> String {
    let n = i64::from(px) * tenths;
    let sign = if n < 0 { "-" } else { "" };
    let abs = n.unsigned_abs();
    match abs % 10 {
        0 => format!("{sign}{}", abs / 10),
        frac => format!("{sign}{}.{frac}", abs / 10),
    }
}
