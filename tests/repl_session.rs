//! End-to-end REPL tests
//!
//! Drives the REPL with scripted input against stubbed page sources and
//! asserts on the captured output and session cursors.

use async_trait::async_trait;
use pokedex::api::{LocationArea, LocationPage, PageSource};
use pokedex::core::PokedexError;
use pokedex::Repl;
use reqwest::StatusCode;
use std::collections::HashMap;

const ROOT: &str = "https://example.test/location-area/";
const PAGE_TWO: &str = "https://example.test/location-area/?offset=20";

/// Serves a fixed page for every URL
struct StubSource {
    page: LocationPage,
}

#[async_trait]
impl PageSource for StubSource {
    async fn fetch_page(&self, _url: &str) -> pokedex::Result<LocationPage> {
        Ok(self.page.clone())
    }
}

/// Serves pages keyed by requested URL, 404s anything else
struct KeyedSource {
    pages: HashMap<String, LocationPage>,
}

#[async_trait]
impl PageSource for KeyedSource {
    async fn fetch_page(&self, url: &str) -> pokedex::Result<LocationPage> {
        self.pages
            .get(url)
            .cloned()
            .ok_or(PokedexError::HttpStatus(StatusCode::NOT_FOUND))
    }
}

fn page(names: &[&str], next: Option<&str>, previous: Option<&str>) -> LocationPage {
    LocationPage {
        next: next.map(String::from),
        previous: previous.map(String::from),
        results: names
            .iter()
            .map(|name| LocationArea {
                name: (*name).to_string(),
                url: format!("https://example.test/location-area/{name}/"),
            })
            .collect(),
    }
}

async fn run_script(repl: &mut Repl, script: &str) -> String {
    let mut input = script.as_bytes();
    let mut out = Vec::new();
    repl.run_with(&mut input, &mut out)
        .await
        .expect("repl run failed");
    String::from_utf8(out).expect("non-utf8 repl output")
}

#[tokio::test]
async fn scripted_session_terminates_on_exit() {
    let source = StubSource {
        page: page(&["canalave-city-area", "eterna-city-area"], None, None),
    };
    let mut repl = Repl::with_source(Box::new(source), ROOT);

    // The trailing `map` sits after `exit` and must never run.
    let output = run_script(&mut repl, "help\nmap\nmapb\nexit\nmap\n").await;

    assert!(output.contains("Welcome to the Pokedex!"));
    assert!(output.contains("map: "));
    assert!(output.contains("canalave-city-area"));
    assert!(output.contains("eterna-city-area"));
    // mapb after a page with no previous cursor reports the first page
    assert!(output.contains("you're on the first page"));
    assert!(output.contains("Closing the Pokedex... Goodbye!"));
    assert_eq!(
        output.matches("canalave-city-area").count(),
        1,
        "the map after exit must not have executed"
    );
}

#[tokio::test]
async fn end_of_input_terminates_cleanly() {
    let source = StubSource {
        page: page(&[], None, None),
    };
    let mut repl = Repl::with_source(Box::new(source), ROOT);

    let output = run_script(&mut repl, "help\n").await;

    assert!(output.ends_with("Pokedex > "));
    assert!(!output.contains("Goodbye"));
}

#[tokio::test]
async fn unknown_command_does_not_stop_the_loop() {
    let source = StubSource {
        page: page(&[], None, None),
    };
    let mut repl = Repl::with_source(Box::new(source), ROOT);

    let output = run_script(&mut repl, "bogus\nhelp\nexit\n").await;

    assert!(output.contains("Unknown command"));
    assert!(output.contains("Welcome to the Pokedex!"));
    assert!(repl.session().is_initial(), "bogus must not touch cursors");
}

#[tokio::test]
async fn blank_lines_reprompt_without_output() {
    let source = StubSource {
        page: page(&[], None, None),
    };
    let mut repl = Repl::with_source(Box::new(source), ROOT);

    let output = run_script(&mut repl, "\n   \nexit\n").await;

    assert_eq!(output.matches("Pokedex > ").count(), 3);
    assert_eq!(
        output,
        "Pokedex > Pokedex > Pokedex > Closing the Pokedex... Goodbye!\n"
    );
}

#[tokio::test]
async fn map_and_mapb_walk_the_cursor_chain() {
    let mut pages = HashMap::new();
    pages.insert(
        ROOT.to_string(),
        page(&["page-one-area"], Some(PAGE_TWO), None),
    );
    pages.insert(
        PAGE_TWO.to_string(),
        page(&["page-two-area"], None, Some(ROOT)),
    );
    let mut repl = Repl::with_source(Box::new(KeyedSource { pages }), ROOT);

    let output = run_script(&mut repl, "map\nmap\nmapb\nexit\n").await;

    // forward: root, then the next cursor; backward: the previous cursor
    assert_eq!(output.matches("page-one-area").count(), 2);
    assert_eq!(output.matches("page-two-area").count(), 1);
    assert_eq!(repl.session().next(), Some(PAGE_TWO));
    assert_eq!(repl.session().previous(), None);
}

#[tokio::test]
async fn fetch_errors_are_printed_and_the_loop_continues() {
    let mut repl = Repl::with_source(
        Box::new(KeyedSource {
            pages: HashMap::new(),
        }),
        ROOT,
    );

    let output = run_script(&mut repl, "map\nhelp\nexit\n").await;

    assert!(output.contains("bad status: 404"));
    assert!(output.contains("Welcome to the Pokedex!"));
    assert!(
        repl.session().is_initial(),
        "failed fetch must leave cursors unchanged"
    );
}
