//! Page composition against the stock catalog.

use beacon_config::STOCK_SECTIONS;
use beacon_render::{ComposeError, Markup, PageComposer, Section, SectionCatalog, SectionContext};
use beacon_types::{PageLayout, SectionName, TokenCategory, TokenError};
use pretty_assertions::assert_eq;
use scraper::{ElementRef, Html, Selector};

use crate::common::{MINIMAL_CONFIG, site_from, stock_site};

fn slot_sections(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_fragment(html);
    let main = Selector::parse("main#page").unwrap();
    let main = document.select(&main).next().expect("main#page");
    main.children()
        .filter_map(ElementRef::wrap)
        .map(|slot| {
            (
                slot.value().attr("data-slot").unwrap().to_string(),
                slot.value().attr("data-section").unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn stock_page_has_eight_children_in_declared_order() {
    let site = stock_site();
    let catalog = SectionCatalog::stock();
    let page = PageComposer::new(&catalog, &site.registry)
        .compose(&site.layout)
        .unwrap();

    let slots = slot_sections(&page.to_html());
    let expected: Vec<(String, String)> = STOCK_SECTIONS
        .iter()
        .enumerate()
        .map(|(position, name)| (position.to_string(), (*name).to_string()))
        .collect();
    assert_eq!(slots, expected);
}

#[test]
fn each_slot_contains_its_section_root() {
    let site = stock_site();
    let catalog = SectionCatalog::stock();
    let html = PageComposer::new(&catalog, &site.registry)
        .compose(&site.layout)
        .unwrap()
        .to_html();
    let document = Html::parse_fragment(&html);
    let slots = Selector::parse("main#page > div.slot").unwrap();

    for slot in document.select(&slots) {
        let name = slot.value().attr("data-section").unwrap();
        let roots: Vec<ElementRef<'_>> = slot.children().filter_map(ElementRef::wrap).collect();
        assert_eq!(roots.len(), 1, "slot {name}");
        assert_eq!(roots[0].value().id(), Some(name));
    }
}

#[test]
fn reordering_the_layout_reorders_the_page() {
    let site = stock_site();
    let catalog = SectionCatalog::stock();
    let layout = PageLayout::parse(["footer", "Pricing", "WhyChooseUs", "navbar"]).unwrap();
    let html = PageComposer::new(&catalog, &site.registry)
        .compose(&layout)
        .unwrap()
        .to_html();

    let names: Vec<String> = slot_sections(&html).into_iter().map(|(_, name)| name).collect();
    assert_eq!(names, ["footer", "pricing", "why-choose-us", "navbar"]);
}

#[test]
fn removing_a_section_keeps_the_rest_contiguous() {
    let site = stock_site();
    let catalog = SectionCatalog::stock();
    let layout = site.layout.without(&SectionName::new("changelog").unwrap());
    let html = PageComposer::new(&catalog, &site.registry)
        .compose(&layout)
        .unwrap()
        .to_html();

    let slots = slot_sections(&html);
    assert_eq!(slots.len(), 7);
    for (index, (position, name)) in slots.iter().enumerate() {
        assert_eq!(position, &index.to_string());
        assert_ne!(name, "changelog");
    }
    assert_eq!(slots[5].1, "pricing");
}

#[test]
fn unknown_section_fails_before_anything_renders() {
    struct Counting;

    impl Section for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn render(&self, _cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
            panic!("no section may render when the layout names an unknown one");
        }
    }

    let site = stock_site();
    let catalog = SectionCatalog::stock().with(Counting);
    let layout = PageLayout::parse(["counting", "hero", "testimonials"]).unwrap();
    let err = PageComposer::new(&catalog, &site.registry)
        .compose(&layout)
        .unwrap_err();

    assert_eq!(
        err,
        ComposeError::MissingSection {
            name: SectionName::new("testimonials").unwrap(),
            position: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "layout position 2 names section `testimonials`, which is not in the catalog"
    );
}

#[test]
fn missing_theme_token_names_the_section() {
    let site = site_from(MINIMAL_CONFIG);
    let catalog = SectionCatalog::stock();
    let err = PageComposer::new(&catalog, &site.registry)
        .compose(&site.layout)
        .unwrap_err();

    assert_eq!(
        err,
        ComposeError::Token {
            section: SectionName::new("navbar").unwrap(),
            source: TokenError::UnknownToken {
                category: TokenCategory::Color,
                name: "gray.200".to_string(),
            },
        }
    );
}

#[test]
fn section_output_does_not_depend_on_neighbours() {
    let site = stock_site();
    let catalog = SectionCatalog::stock();
    let composer = PageComposer::new(&catalog, &site.registry);

    let alone = composer
        .compose(&PageLayout::parse(["pricing"]).unwrap())
        .unwrap();
    let full = composer.compose(&site.layout).unwrap();

    let in_full = full
        .sections()
        .iter()
        .find(|section| section.name.as_str() == "pricing")
        .unwrap();
    assert_eq!(alone.sections()[0].markup, in_full.markup);
}
