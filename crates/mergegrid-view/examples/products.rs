//! Grouped product table demo.
//!
//! Builds a mock product feed like the one the engine was designed around,
//! sorts it on the mergeable columns so runs form, then scrolls a
//! virtualized window through it, toggling a group checkbox along the way.
//!
//! Run with: `cargo run --example products`

use mergegrid::config::{Column, GridConfig};
use mergegrid::row::{Record, RowAccess};
use mergegrid::value::CellValue;
use mergegrid_view::table::GridView;
use mergegrid_view::window::{Virtualizer, WindowPlanner};

const SHIPPING_METHODS: [&str; 4] = ["parcel", "direct", "express", "dawn"];
const TEMPERATURES: [&str; 3] = ["ambient", "chilled", "frozen"];
const PRODUCT_NAMES: [&str; 6] = [
    "Organic Apple",
    "Jeju Tangerine",
    "Domestic Banana",
    "Pesticide-Free Strawberry",
    "Eco Grape",
    "Fresh Orange",
];

/// xorshift64, so the feed is deterministic across runs.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn pick(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

fn generate_products(count: usize) -> Vec<Record> {
    let mut rng = Rng(0x5EED);
    (0..count)
        .map(|i| {
            Record::new(format!("PROD-{:05}", i + 1))
                .with("boxCount", (rng.pick(10) + 1) as i64)
                .with("shippingMethod", SHIPPING_METHODS[rng.pick(SHIPPING_METHODS.len())])
                .with("productTemperature", TEMPERATURES[rng.pick(TEMPERATURES.len())])
                .with("configurationCount", (rng.pick(5) + 1) as i64)
                .with("productName", PRODUCT_NAMES[rng.pick(PRODUCT_NAMES.len())])
        })
        .collect()
}

fn sort_key(row: &Record, columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .map(|col| {
            row.value(col)
                .map(CellValue::to_string)
                .unwrap_or_default()
        })
        .collect()
}

fn main() {
    let mergeable = ["boxCount", "shippingMethod", "productTemperature", "configurationCount"];

    let config = GridConfig::new(
        vec![
            Column::new("select", "", 4),
            Column::new("boxCount", "Boxes", 6),
            Column::new("shippingMethod", "Shipping", 10),
            Column::new("productTemperature", "Temp", 8),
            Column::new("configurationCount", "Configs", 8),
            Column::new("productName", "Product", 26),
        ],
        mergeable,
        Some("select"),
    )
    .expect("static configuration is valid");

    // The engine groups adjacent rows only, so sort on the mergeable tuple
    // the way the hosting table's sort model would.
    let mut products = generate_products(2_000);
    products.sort_by_key(|row| sort_key(row, &mergeable));

    let mut view = GridView::new(config, products);
    let mut planner = WindowPlanner::new(view.rows().len(), 12 * 35);

    println!("== top of the feed ==");
    let window = planner.window();
    println!("{}", view.view(&window).expect("window is in range"));
    for item in window.items() {
        planner.measure(item.index, 35);
    }

    // Toggle the first visible group's checkbox.
    let first = window.first_index().expect("feed is not empty");
    view.toggle_group_at(first).expect("index from the window");
    println!("\nselected rows: {}", view.selected_count());

    planner.scroll_down(700 * 35);
    println!("\n== mid-feed window ==");
    println!("{}", view.view(&planner.window()).expect("window is in range"));

    println!("\ntotal extent: {} units", planner.total_size());
}
