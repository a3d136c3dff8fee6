//! End-to-end scenarios: document text in, navigable state out.

use folio::carousel::SlotBucket;
use folio::model::IMAGES_DIR;
use folio::parser::parse_portfolio;
use folio::state::{AppState, ThemeMode};

const DOC: &str = r#"{
  "name": "Ada Lovelace",
  "tagline": "Analytical engines",
  "links": [
    { "label": "GitHub", "url": "https://github.com/ada" }
  ],
  "entries": [
    {
      "title": "Notes on the Engine",
      "date": "1843-07",
      "description": "Translation and commentary.",
      "tags": ["math"],
      "images": ["notes-1.png", "notes-2.png", "notes-3.png", "notes-4.png", "notes-5.png"]
    },
    {
      "title": "First program",
      "date": "1843-10-01",
      "images": [
        { "src": "bernoulli.png", "alt": "Note G", "caption": "Bernoulli numbers" }
      ]
    },
    {
      "title": "Untitled sketch"
    }
  ]
}"#;

fn state() -> AppState {
    let portfolio = parse_portfolio(DOC).expect("document parses");
    AppState::new(portfolio, IMAGES_DIR, ThemeMode::Auto)
}

#[test]
fn five_image_gallery_fans_out_around_the_active_card() {
    let mut state = state();
    // After date sorting the five-image entry sits in the middle.
    state.focused_entry = Some(1);
    state.step_carousel(1);
    state.step_carousel(1);

    let carousel = state.focused_carousel().expect("the entry has a carousel");
    assert_eq!(carousel.active_index(), 2);
    let buckets: Vec<_> = carousel.layout().iter().map(|l| l.bucket).collect();
    assert_eq!(
        buckets,
        vec![
            SlotBucket::FarPrev,
            SlotBucket::Prev,
            SlotBucket::Active,
            SlotBucket::Next,
            SlotBucket::FarNext,
        ]
    );
}

#[test]
fn walking_forward_n_steps_returns_home() {
    let mut state = state();
    state.focused_entry = Some(1);
    for _ in 0..5 {
        state.step_carousel(1);
    }
    assert_eq!(
        state.focused_carousel().map(|c| c.active_index()),
        Some(0),
        "five forward steps over five items is a full loop"
    );
}

#[test]
fn detailed_image_metadata_reaches_the_overlay() {
    let mut state = state();
    state.focused_entry = Some(2);
    state.open_active_image();

    let open = state.open_image.as_ref().expect("overlay opened");
    assert_eq!(open.source, "images/bernoulli.png");
    assert_eq!(open.alt_text.as_deref(), Some("Note G"));
    assert_eq!(open.caption.as_deref(), Some("Bernoulli numbers"));
}

#[test]
fn imageless_entry_ignores_carousel_actions() {
    let mut state = state();
    state.focused_entry = Some(0);
    state.step_carousel(1);
    state.activate_image(1);
    assert!(state.open_image.is_none());
    assert!(state.focused_carousel().is_none());
}

#[test]
fn entries_arrive_sorted_ascending_by_date() {
    let state = state();
    let titles: Vec<_> = state
        .portfolio()
        .entries
        .iter()
        .map(|e| e.title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![
            Some("Untitled sketch"),
            Some("Notes on the Engine"),
            Some("First program"),
        ],
        "undated entries sort first, then ascending dates"
    );
}

#[test]
fn focus_starts_on_the_latest_entry() {
    let state = state();
    assert_eq!(state.focused_entry, Some(2));
}
